#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePlacement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Flow tiles left to right, wrapping to a new row when the next tile would
/// cross `screen_width - padding`. A tile wider than the screen still gets a
/// row of its own rather than an empty row above it.
pub fn place_tiles(sizes: &[TileSize], screen_width: u32, padding: u32) -> Vec<TilePlacement> {
    let mut placements = Vec::with_capacity(sizes.len());
    let mut x = padding;
    let mut y = padding;
    let mut row_height = 0;

    for size in sizes {
        let overflows = x.saturating_add(size.width).saturating_add(padding) > screen_width;
        if overflows && x > padding {
            x = padding;
            y = y.saturating_add(row_height).saturating_add(padding);
            row_height = 0;
        }

        placements.push(TilePlacement {
            x,
            y,
            width: size.width,
            height: size.height,
        });

        x = x.saturating_add(size.width).saturating_add(padding);
        row_height = row_height.max(size.height);
    }

    placements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(width: u32, height: u32) -> TileSize {
        TileSize { width, height }
    }

    #[test]
    fn wraps_when_row_is_full() {
        let placed = place_tiles(&[tile(100, 80), tile(100, 120), tile(100, 80)], 250, 10);
        let origins: Vec<(u32, u32)> = placed.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(origins, vec![(10, 10), (120, 10), (10, 140)]);
    }

    #[test]
    fn oversized_first_tile_stays_on_first_row() {
        let placed = place_tiles(&[tile(500, 50), tile(20, 20)], 300, 10);
        assert_eq!((placed[0].x, placed[0].y), (10, 10));
        assert_eq!((placed[1].x, placed[1].y), (10, 70));
    }

    #[test]
    fn huge_padding_saturates_instead_of_overflowing() {
        let placed = place_tiles(&[tile(10, 10), tile(10, 10)], 100, u32::MAX / 2 + 1);
        assert_eq!(placed[1].x, u32::MAX / 2 + 1);
        assert_eq!(placed[1].y, u32::MAX);
    }

    #[test]
    fn empty_input_places_nothing() {
        assert!(place_tiles(&[], 800, 12).is_empty());
    }
}
