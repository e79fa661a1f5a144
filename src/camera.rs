use crate::CellSize;
use crate::Coord;
use crate::generation::Bounds;
use crate::generation::Generation;

/// Hex values of braille dots
///
/// ```notrust
///  1   8
///  2  10
///  4  20
/// 40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

const BRAILLE_BLANK: char = '\u{2800}';

/// Draws generations to the terminal, one braille dot per cell.
pub struct Camera {
    /// The cell buffer
    cb: Vec<bool>,

    /// The frame buffer.
    fb: String,

    /// Codepoints. This allows us to construct the framebuffer more easily
    cp: Vec<u32>,

    /// Width of the cell buffer
    w: usize,

    /// Height of the cell buffer
    h: usize,

    /// Grid column shown at the left edge
    x: Coord,

    /// Grid row shown at the top edge
    y: Coord,
}

impl Camera {
    /// A camera showing `w` by `h` cells
    pub fn new(w: usize, h: usize) -> Self {
        // Each braille character holds a 2x4 block of cells, so the framebuffer is
        // `bw = ceil(w / 2)` characters wide and `bh = ceil(h / 4)` lines tall.
        let (bw, bh) = (w.div_ceil(2), h.div_ceil(4));
        let cp = vec![BRAILLE_EMPTY; bw * bh];

        // 3 bytes per braille character, plus one newline per line
        let fb = String::with_capacity(3 * (bw * bh) + bh);

        Self {
            cb: vec![false; w * h],
            fb,
            cp,
            w,
            h,
            x: 0,
            y: 0,
        }
    }

    /// A camera filling a terminal of `cols` by `rows` characters
    pub fn for_terminal(cols: u16, rows: u16) -> Self {
        Self::new(2 * cols as usize, 4 * rows as usize)
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn offset_x(&mut self, offset: Coord) {
        self.x += offset;
    }

    pub fn offset_y(&mut self, offset: Coord) {
        self.y += offset;
    }

    /// Move the view so the middle of `bounds` is in the middle of the screen
    pub fn center_on(&mut self, bounds: Bounds, cell_size: CellSize) {
        let s = cell_size.get() as Coord;

        let mid_x = (bounds.min_x.div_euclid(s) + bounds.max_x.div_euclid(s)).div_euclid(2);
        let mid_y = (bounds.min_y.div_euclid(s) + bounds.max_y.div_euclid(s)).div_euclid(2);

        self.offset_x(mid_x - self.w as Coord / 2 - self.x);
        self.offset_y(mid_y - self.h as Coord / 2 - self.y);
    }

    /// Turns on a single pixel of the framebuffer
    pub fn draw_pixel(&mut self, x: usize, y: usize) {
        assert!(x < self.w, "x is out of bounds");
        assert!(y < self.h, "y is out of bounds");

        let i = self.xy_from(x, y);

        self.cb[i] = true;
    }

    /// Draw every living cell in view. Cells outside the view are skipped.
    pub fn draw(&mut self, generation: &Generation, cell_size: CellSize) {
        let s = cell_size.get() as Coord;

        for cell in generation {
            let x = cell.x.div_euclid(s) - self.x;
            let y = cell.y.div_euclid(s) - self.y;

            let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
                continue;
            };

            if x < self.w && y < self.h {
                self.draw_pixel(x, y);
            }
        }
    }

    /// Reset the cell buffer
    pub fn reset(&mut self) {
        self.cb.fill(false);
    }

    /// Turn the cell buffer into lines of braille characters, each line ending in `\n`.
    pub fn render(&mut self) -> &str {
        let bw = self.w.div_ceil(2);

        // compute new codepoints
        self.cp.fill(BRAILLE_EMPTY);

        for (n, &px) in self.cb.iter().enumerate() {
            if px {
                let (x, y) = (n % self.w, n / self.w);
                self.cp[(y / 4) * bw + (x / 2)] += Self::get_hex_value(x, y);
            }
        }

        // update framebuffer
        self.fb.clear();

        for (i, &c) in self.cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                self.fb.push('\n');
            }

            self.fb.push(char::from_u32(c).unwrap_or(BRAILLE_BLANK));
        }
        self.fb.push('\n');

        &self.fb
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    fn get_hex_value(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}
