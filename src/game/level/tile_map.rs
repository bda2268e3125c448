// Tile map parsing and world placement

use crate::core::math::Rect;
use std::path::Path;

/// Tile map loading errors
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Invalid tile code {token:?} at row {row}, column {column}")]
    InvalidToken {
        row: usize,
        column: usize,
        token: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Named tile codes used by the bundled level art
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    GrassLeftEdge,
    GrassMiddle,
    GrassRightEdge,
    GrassLeftBottomEdge,
    GrassMiddleBottom,
    GrassRightBottomEdge,
    WaterTop,
    WaterBottom,
}

impl TileKind {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::GrassLeftEdge),
            1 => Some(Self::GrassMiddle),
            2 => Some(Self::GrassRightEdge),
            3 => Some(Self::GrassLeftBottomEdge),
            4 => Some(Self::GrassMiddleBottom),
            5 => Some(Self::GrassRightBottomEdge),
            6 => Some(Self::WaterTop),
            7 => Some(Self::WaterBottom),
            _ => None,
        }
    }
}

/// Whether a cell holds a tile; any negative code is empty
pub fn is_solid(code: i32) -> bool {
    code >= 0
}

/// One non-empty cell positioned in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePlacement {
    pub row: usize,
    pub column: usize,
    pub code: i32,
    pub bounds: Rect,
}

/// Grid of tile codes, top row first
///
/// Rows may have different lengths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileMap {
    rows: Vec<Vec<i32>>,
}

impl TileMap {
    /// Parse comma-separated integer rows, one per line
    pub fn parse(source: &str) -> Result<Self, MapError> {
        let rows = source
            .trim_end()
            .lines()
            .enumerate()
            .map(|(row, line)| parse_row(row, line))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows })
    }

    pub fn load(path: &Path) -> Result<Self, MapError> {
        let source = std::fs::read_to_string(path)?;
        let map = Self::parse(&source)?;
        log::info!(
            "Loaded {}x{} tile map from {}",
            map.width(),
            map.height(),
            path.display()
        );
        Ok(map)
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// World rectangle of a cell; row 0 is the highest
    pub fn cell_bounds(&self, row: usize, column: usize, tile_size: f32) -> Rect {
        let top = (self.height() - row) as f32 * tile_size;
        Rect::new(column as f32 * tile_size, top - tile_size, tile_size, tile_size)
    }

    /// Every non-empty cell with its world rectangle
    pub fn placements(&self, tile_size: f32) -> impl Iterator<Item = TilePlacement> + '_ {
        self.rows.iter().enumerate().flat_map(move |(row, codes)| {
            codes
                .iter()
                .enumerate()
                .filter(|(_, code)| is_solid(**code))
                .map(move |(column, &code)| TilePlacement {
                    row,
                    column,
                    code,
                    bounds: self.cell_bounds(row, column, tile_size),
                })
        })
    }

    /// Solid cells merged into horizontal runs, one rectangle per run
    pub fn solid_runs(&self, tile_size: f32) -> Vec<Rect> {
        let mut runs = Vec::new();

        for (row, codes) in self.rows.iter().enumerate() {
            let mut start: Option<usize> = None;
            for column in 0..=codes.len() {
                let solid = codes.get(column).is_some_and(|&code| is_solid(code));
                match (solid, start) {
                    (true, None) => start = Some(column),
                    (false, Some(first)) => {
                        let cell = self.cell_bounds(row, first, tile_size);
                        let width = (column - first) as f32 * tile_size;
                        runs.push(Rect::new(cell.left, cell.bottom, width, tile_size));
                        start = None;
                    }
                    _ => {}
                }
            }
        }

        runs
    }
}

fn parse_row(row: usize, line: &str) -> Result<Vec<i32>, MapError> {
    line.split(',')
        .enumerate()
        .map(|(column, token)| {
            let token = token.trim();
            token.parse::<i32>().map_err(|_| MapError::InvalidToken {
                row,
                column,
                token: token.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_grid() {
        let map = TileMap::parse("-1,0,1\n2,-1,-1").unwrap();
        assert_eq!(map.rows, [vec![-1, 0, 1], vec![2, -1, -1]]);
        assert_eq!(map.height(), 2);
        assert_eq!(map.width(), 3);
    }

    #[test]
    fn test_parse_tolerates_whitespace_and_trailing_newline() {
        let map = TileMap::parse(" 1, 2 ,3\r\n4,5,6\n\n").unwrap();
        assert_eq!(map.rows, [vec![1, 2, 3], vec![4, 5, 6]]);
    }

    #[test]
    fn test_parse_ragged_rows() {
        let map = TileMap::parse("1\n1,2,3\n-1,4").unwrap();
        assert_eq!(map.rows[0].len(), 1);
        assert_eq!(map.width(), 3);
        assert_eq!(map.rows[2][1], 4);
        assert_eq!(map.rows[0].get(2), None);
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join("scroll-animator-map-load");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("map.csv");
        std::fs::write(&path, "-1,-1,6\n1,1,7\n").unwrap();

        let map = TileMap::load(&path).unwrap();
        assert_eq!(map.height(), 2);
        assert_eq!(map.width(), 3);
        assert_eq!(map.rows[1], vec![1, 1, 7]);
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("scroll-animator-no-such-map.csv");
        let err = TileMap::load(&path).unwrap_err();
        assert!(matches!(err, MapError::Io(_)));
    }

    #[test]
    fn test_parse_rejects_non_integer() {
        let err = TileMap::parse("1,2\n3,grass,5").unwrap_err();
        match err {
            MapError::InvalidToken { row, column, token } => {
                assert_eq!((row, column), (1, 1));
                assert_eq!(token, "grass");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_parse_rejects_blank_interior_line() {
        assert!(TileMap::parse("1,2\n\n3,4").is_err());
    }

    #[test]
    fn test_placements_use_row_from_top() {
        let map = TileMap::parse("-1,0\n1,-1").unwrap();
        let placements: Vec<_> = map.placements(128.0).collect();

        assert_eq!(placements.len(), 2);

        let top = placements[0];
        assert_eq!((top.row, top.column, top.code), (0, 1, 0));
        assert_relative_eq!(top.bounds.left, 128.0);
        assert_relative_eq!(top.bounds.top(), 256.0);

        let bottom = placements[1];
        assert_eq!((bottom.row, bottom.column, bottom.code), (1, 0, 1));
        assert_relative_eq!(bottom.bounds.left, 0.0);
        assert_relative_eq!(bottom.bounds.top(), 128.0);
        assert_relative_eq!(bottom.bounds.bottom, 0.0);
    }

    #[test]
    fn test_negative_codes_are_empty() {
        let map = TileMap::parse("-3,-1,7").unwrap();
        let codes: Vec<i32> = map.placements(10.0).map(|p| p.code).collect();
        assert_eq!(codes, vec![7]);
    }

    #[test]
    fn test_solid_runs_merge_neighbours() {
        let map = TileMap::parse("0,1,2,-1,6\n-1,-1,-1,-1,-1").unwrap();
        let runs = map.solid_runs(100.0);

        assert_eq!(runs.len(), 2);
        assert_relative_eq!(runs[0].left, 0.0);
        assert_relative_eq!(runs[0].width, 300.0);
        assert_relative_eq!(runs[0].bottom, 100.0);
        assert_relative_eq!(runs[1].left, 400.0);
        assert_relative_eq!(runs[1].width, 100.0);
    }

    #[test]
    fn test_tile_kinds() {
        assert_eq!(TileKind::from_code(0), Some(TileKind::GrassLeftEdge));
        assert_eq!(TileKind::from_code(7), Some(TileKind::WaterBottom));
        assert_eq!(TileKind::from_code(8), None);
        assert_eq!(TileKind::from_code(-1), None);
        assert_eq!(TileKind::from_code(6), Some(TileKind::WaterTop));
    }
}
