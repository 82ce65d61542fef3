// ═══════════════════════════════════════════════════════════════════════
// Board config — difficulty names and custom TOML board files
// ═══════════════════════════════════════════════════════════════════════

use sotelo_engine::{BoardConfig, Difficulty};
use std::path::Path;

/// Parse a board file such as:
///
/// ```toml
/// size = 8
/// obstacles = 15
/// ```
pub fn parse_board_config(text: &str) -> Result<BoardConfig, String> {
    let config: BoardConfig = toml::from_str(text).map_err(|e| format!("bad board file: {}", e))?;
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

pub fn load_board_config(path: &Path) -> Result<BoardConfig, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    parse_board_config(&text)
}

/// A custom board file wins over the difficulty table.
pub fn resolve_board_config(difficulty: Difficulty, file: Option<&Path>) -> Result<BoardConfig, String> {
    match file {
        Some(path) => load_board_config(path),
        None => Ok(difficulty.config()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board_file() {
        let config = parse_board_config("size = 8\nobstacles = 15\n").unwrap();
        assert_eq!(config, BoardConfig::new(8, 15));
    }

    #[test]
    fn test_board_file_rejections() {
        assert!(parse_board_config("size = 3\nobstacles = 7\n").is_err());
        assert!(parse_board_config("size = 8\n").is_err());
        assert!(parse_board_config("not toml at all").is_err());
    }

    #[test]
    fn test_oversized_board_file_is_error() {
        assert!(parse_board_config("size = 5000000000\nobstacles = 0\n").is_err());
        let err = parse_board_config("size = 100000\nobstacles = 0\n").unwrap_err();
        assert!(err.contains("size must be at most"));
    }

    #[test]
    fn test_board_file_overrides_difficulty() {
        let path = std::env::temp_dir().join(format!("sotelo-board-{}.toml", std::process::id()));
        std::fs::write(&path, "size = 6\nobstacles = 4\n").unwrap();
        let config = resolve_board_config(Difficulty::Hard, Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config, BoardConfig::new(6, 4));
        assert_eq!(resolve_board_config(Difficulty::Hard, None).unwrap(), Difficulty::Hard.config());
    }
}
