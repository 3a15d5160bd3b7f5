use crossword_packer::{
    Crossword, GeneratorConfig, generate, normalize_entries, parse_word_list, puzzle_to_json,
};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CrosswordOptions {
    attempts_per_size: Option<usize>,
    max_escalations: Option<usize>,
    size_increment: Option<usize>,
    preferred_size: Option<usize>,
    seed: Option<u64>,
}

fn build_config(options: CrosswordOptions) -> GeneratorConfig {
    let mut config = GeneratorConfig::default();
    if let Some(v) = options.attempts_per_size {
        config.attempts_per_size = v;
    }
    if let Some(v) = options.max_escalations {
        config.max_escalations = v;
    }
    if let Some(v) = options.size_increment {
        config.size_increment = v;
    }
    config.preferred_size = options.preferred_size;
    config.seed = options.seed;
    config
}

fn generate_json(words: &str, options: CrosswordOptions) -> Result<String, String> {
    let raw = parse_word_list(words).map_err(|error| error.to_string())?;
    let entries = normalize_entries(&raw);
    let puzzle = generate(&entries, &build_config(options)).map_err(|error| error.to_string())?;
    puzzle_to_json(&Crossword::from_puzzle(puzzle)).map_err(|error| error.to_string())
}

#[wasm_bindgen]
pub fn generate_crossword(words: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let options = if let Some(raw_options) = options_json {
        serde_json::from_str::<CrosswordOptions>(&raw_options)
            .map_err(|error| JsValue::from_str(&error.to_string()))?
    } else {
        CrosswordOptions::default()
    };

    generate_json(words, options).map_err(|error| JsValue::from_str(&error))
}
