//! Tests for game constants and defaults

#[cfg(test)]
mod tests {
    use tilemerge::io::configuration::{
        DEFAULT_HEIGHT, DEFAULT_WIDTH, INITIAL_TILES, MAX_GRID_DIMENSION, MIN_CELL_WIDTH,
        SPAWN_HIGH_PROBABILITY, SPAWN_HIGH_VALUE, SPAWN_LOW_VALUE, WIN_TILE,
    };

    // Tests the default board is the classic square
    // Verified by changing the default height
    #[test]
    fn test_default_board_is_square() {
        assert_eq!(DEFAULT_WIDTH, 4);
        assert_eq!(DEFAULT_HEIGHT, 4);
        assert!(DEFAULT_WIDTH <= MAX_GRID_DIMENSION);
    }

    // Tests the winning tile value
    // Verified by changing the win tile
    #[test]
    fn test_win_tile() {
        assert_eq!(WIN_TILE, 2048);
        assert!(WIN_TILE.is_power_of_two());
    }

    // Tests spawn values and their probability
    // Verified by swapping the low and high values
    #[test]
    fn test_spawn_settings() {
        assert_eq!(SPAWN_LOW_VALUE, 2);
        assert_eq!(SPAWN_HIGH_VALUE, 4);
        assert!((SPAWN_HIGH_PROBABILITY - 0.1).abs() < f64::EPSILON);
        assert_eq!(INITIAL_TILES, 2);
    }

    // Tests the rendered cell width fits the winning tile
    // Verified by reducing the minimum width
    #[test]
    fn test_min_cell_width() {
        assert_eq!(MIN_CELL_WIDTH, WIN_TILE.to_string().len());
    }
}
