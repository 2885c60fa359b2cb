use crate::grid::{Grid, ALIVE};

use super::{RenderParams, Renderer};

/// Square ABGR surface of `cell_size * grid_size` pixels.
///
/// Each cell is a `cell_size` block. With grid lines on (and cells at least
/// 2px), the first pixel row and column of every block use the line color.
pub struct PixelRenderer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Default for PixelRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelRenderer {
    pub fn new() -> Self {
        Self { width: 0, height: 0, pixels: Vec::new() }
    }

    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }

    pub fn pixels(&self) -> &[u32] { &self.pixels }

    pub fn pixels_ptr(&self) -> *const u32 { self.pixels.as_ptr() }

    pub fn pixels_len(&self) -> usize { self.pixels.len() }

    pub fn pixels_byte_len(&self) -> usize {
        self.pixels.len() * std::mem::size_of::<u32>()
    }

    /// Pixel at (x, y), None outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    /// Resizes only when the grid or cell size changed
    fn ensure_surface(&mut self, edge: u32) {
        if self.width != edge || self.height != edge {
            self.width = edge;
            self.height = edge;
            self.pixels = vec![0u32; (edge as usize) * (edge as usize)];
        }
    }
}

impl Renderer for PixelRenderer {
    fn render(&mut self, grid: &Grid, params: &RenderParams) {
        let cell = params.cell_size.max(1);
        let size = grid.size();
        self.ensure_surface(cell * size);

        let alive = params.alive_color.abgr();
        let dead = params.dead_color.abgr();
        let line = params.grid_line_color.abgr();
        let lines = params.show_grid_lines && cell >= 2;
        let width = self.width as usize;
        let cell_px = cell as usize;

        // One cell row at a time: build the first pixel row of the band, then
        // copy it down (the band's top row is the grid line when enabled).
        let mut band_row = vec![dead; width];
        for row in 0..size {
            for col in 0..size {
                let fill = if grid.cells()[grid.index(row, col)] == ALIVE { alive } else { dead };
                let start = (col as usize) * cell_px;
                band_row[start..start + cell_px].fill(fill);
                if lines {
                    band_row[start] = line;
                }
            }

            let band_top = (row as usize) * cell_px * width;
            for dy in 0..cell_px {
                let dst = &mut self.pixels[band_top + dy * width..band_top + (dy + 1) * width];
                if lines && dy == 0 {
                    dst.fill(line);
                } else {
                    dst.copy_from_slice(&band_row);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::SimulationConfig;

    fn params(cell_size: u32, show_grid_lines: bool) -> RenderParams {
        RenderParams {
            cell_size,
            show_grid_lines,
            ..RenderParams::from_config(&SimulationConfig::default())
        }
    }

    #[test]
    fn surface_matches_grid_and_cell_size() {
        let mut r = PixelRenderer::new();
        r.render(&Grid::new(10), &params(4, false));
        assert_eq!((r.width(), r.height()), (40, 40));
        assert_eq!(r.pixels_len(), 1600);
        assert_eq!(r.pixels_byte_len(), 6400);
    }

    #[test]
    fn cells_fill_their_block() {
        let mut grid = Grid::new(10);
        grid.set(1, 2, true);
        let p = params(3, false);
        let mut r = PixelRenderer::new();
        r.render(&grid, &p);

        let alive = p.alive_color.abgr();
        let dead = p.dead_color.abgr();
        for y in 3..6 {
            for x in 6..9 {
                assert_eq!(r.pixel(x, y), Some(alive));
            }
        }
        assert_eq!(r.pixel(5, 3), Some(dead));
        assert_eq!(r.pixel(6, 6), Some(dead));
        assert_eq!(r.pixel(30, 0), None);
    }

    #[test]
    fn grid_lines_cover_block_edges_only() {
        let mut grid = Grid::new(10);
        grid.set(0, 0, true);
        let p = params(4, true);
        let mut r = PixelRenderer::new();
        r.render(&grid, &p);

        let line = p.grid_line_color.abgr();
        assert_eq!(r.pixel(0, 0), Some(line));
        assert_eq!(r.pixel(4, 2), Some(line));
        assert_eq!(r.pixel(2, 8), Some(line));
        assert_eq!(r.pixel(1, 1), Some(p.alive_color.abgr()));
        assert_eq!(r.pixel(5, 5), Some(p.dead_color.abgr()));
    }

    #[test]
    fn one_pixel_cells_skip_grid_lines() {
        let mut grid = Grid::new(10);
        grid.set(0, 0, true);
        let p = params(1, true);
        let mut r = PixelRenderer::new();
        r.render(&grid, &p);
        assert_eq!(r.pixel(0, 0), Some(p.alive_color.abgr()));
    }

    #[test]
    fn rendering_does_not_mutate_grid() {
        let grid = Grid::from_rows(10, &["###", "#.#"]);
        let before = grid.clone();
        let mut r = PixelRenderer::new();
        r.render(&grid, &params(5, true));
        assert_eq!(grid, before);
    }
}
