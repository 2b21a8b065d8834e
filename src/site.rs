//! Static site generation around the markdown core: copying assets,
//! discovering content files and filling the page template.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::{Config, ConfigError};
use crate::error::Error;
use crate::inline::{Tokenizer, extract_title};
use crate::parser;

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{ (Title|Content) \}\}").expect("valid placeholder regex")
});

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("I/O error at {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("Failed to read page {}: {source}", path.display())]
    Source { path: PathBuf, source: io::Error },

    #[error("Failed to generate {}: {source}", path.display())]
    Page { path: PathBuf, source: Error },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> SiteError + '_ {
    move |source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Outcome of a site build.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub static_files: usize,
    pub pages: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

/// Render a markdown document into a full page using `template`.
///
/// Both placeholders are filled in one pass, so placeholder text inside
/// the title or the body is left as is.
pub fn render_page(markdown: &str, template: &str, tokenizer: &Tokenizer) -> Result<String, Error> {
    let content = parser::parse(markdown, tokenizer)?.render()?;
    let title = extract_title(markdown)?;
    let page = PLACEHOLDER_RE.replace_all(template, |caps: &Captures| match &caps[1] {
        "Title" => title.clone(),
        _ => content.clone(),
    });
    Ok(page.into_owned())
}

/// Replace `dst` with a recursive copy of `src`, returning the number of files copied.
pub fn copy_static(src: &Path, dst: &Path) -> Result<usize, SiteError> {
    if dst.exists() {
        fs::remove_dir_all(dst).map_err(io_error(dst))?;
    }
    fs::create_dir_all(dst).map_err(io_error(dst))?;

    if !src.is_dir() {
        log::warn!("Static directory {} not found, nothing copied", src.display());
        return Ok(0);
    }
    copy_dir(src, dst)
}

fn copy_dir(src: &Path, dst: &Path) -> Result<usize, SiteError> {
    let mut copied = 0;
    for entry in fs::read_dir(src).map_err(io_error(src))? {
        let entry = entry.map_err(io_error(src))?;
        let from = entry.path();
        let to = dst.join(entry.file_name());

        if from.is_dir() {
            fs::create_dir_all(&to).map_err(io_error(&to))?;
            copied += copy_dir(&from, &to)?;
        } else {
            log::debug!("Copying {} -> {}", from.display(), to.display());
            fs::copy(&from, &to).map_err(io_error(&from))?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// All `.md` files below `dir`, sorted by path.
pub fn find_markdown_files(dir: &Path) -> Result<Vec<PathBuf>, SiteError> {
    let mut files = Vec::new();
    collect_markdown_files(dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_markdown_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), SiteError> {
    for entry in fs::read_dir(dir).map_err(io_error(dir))? {
        let path = entry.map_err(io_error(dir))?.path();
        if path.is_dir() {
            collect_markdown_files(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            files.push(path);
        }
    }
    Ok(())
}

/// Render the markdown file `from` through `template_path` into `dest`.
pub fn generate_page(
    from: &Path,
    template_path: &Path,
    dest: &Path,
    tokenizer: &Tokenizer,
) -> Result<(), SiteError> {
    log::info!(
        "Generating page from {} to {} using {}",
        from.display(),
        dest.display(),
        template_path.display()
    );

    let markdown = fs::read_to_string(from).map_err(|source| SiteError::Source {
        path: from.to_path_buf(),
        source,
    })?;
    let template = fs::read_to_string(template_path).map_err(io_error(template_path))?;

    let page = render_page(&markdown, &template, tokenizer).map_err(|source| SiteError::Page {
        path: from.to_path_buf(),
        source,
    })?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }
    fs::write(dest, page).map_err(io_error(dest))
}

/// Copy static assets and generate one HTML page per content file.
pub fn build_site(config: &Config) -> Result<BuildReport, SiteError> {
    let paths = &config.paths;
    let tokenizer = config.tokenizer();
    let mut report = BuildReport {
        static_files: copy_static(&paths.static_dir, &paths.public_dir)?,
        ..BuildReport::default()
    };

    for file in find_markdown_files(&paths.content_dir)? {
        let relative = file.strip_prefix(&paths.content_dir).unwrap_or(&file);
        let dest = paths.public_dir.join(relative).with_extension("html");

        match generate_page(&file, &paths.template, &dest, &tokenizer) {
            Ok(()) => report.pages.push(dest),
            Err(e @ (SiteError::Source { .. } | SiteError::Page { .. }))
                if !config.build.fail_fast =>
            {
                log::warn!("Skipping page: {e}");
                report.failed.push(file);
            }
            Err(e) => return Err(e),
        }
    }

    log::info!(
        "Built {} page(s), copied {} static file(s), {} failed",
        report.pages.len(),
        report.static_files,
        report.failed.len()
    );
    Ok(report)
}
