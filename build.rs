use std::fs;

fn main() {
    // Validate default config at compile time
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    // The inline delimiter table must be present and non-empty
    let delimiters = table
        .get("inline")
        .and_then(|inline| inline.get("delimiters"))
        .and_then(|d| d.as_array());
    let delimiters = match delimiters {
        Some(list) if !list.is_empty() => list,
        _ => panic!("default_config.toml must define [[inline.delimiters]]"),
    };

    for delimiter in delimiters {
        let token = delimiter.get("token").and_then(|t| t.as_str());
        if token.is_none_or(str::is_empty) {
            panic!("Invalid delimiter token in default_config.toml: {}", delimiter);
        }
        match delimiter.get("kind").and_then(|k| k.as_str()) {
            Some("code" | "bold" | "italic") => {}
            other => panic!("Invalid delimiter kind in default_config.toml: {:?}", other),
        }
    }
}
