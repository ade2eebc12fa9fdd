/// Selects which integral tables [`build`] computes, so a caller that has
/// disabled edge-density pruning never pays for the Sobel pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildFlags {
    pub squared: bool,
    pub tilted: bool,
    pub sobel: bool,
}

impl BuildFlags {
    /// Only the plain SAT is built.
    #[must_use]
    pub fn sat_only() -> Self {
        Self::default()
    }

    /// Every table is built.
    #[must_use]
    pub fn all() -> Self {
        Self { squared: true, tilted: true, sobel: true }
    }
}

/// A summed-area table: cell `(x, y)` is the sum of the source buffer over
/// the axis-aligned rectangle `[0,x] x [0,y]`. Stored with one extra padding
/// row and column of zeros so rectangle sums never need bounds checks.
#[derive(Debug, Clone)]
pub struct IntegralImage {
    data: Vec<i64>,
    width: usize,
    height: usize,
}

impl IntegralImage {
    fn build(values: impl Fn(usize, usize) -> i64, width: usize, height: usize) -> Self {
        let stride = width + 1;
        let mut data = vec![0i64; stride * (height + 1)];

        for y in 0..height {
            for x in 0..width {
                let p = values(x, y);
                let above = data[y * stride + (x + 1)];
                let left = data[(y + 1) * stride + x];
                let above_left = data[y * stride + x];
                data[(y + 1) * stride + (x + 1)] = above + left - above_left + p;
            }
        }

        Self { data, width, height }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Sum over the rectangle with top-left `(x, y)` and size `(w, h)`, per
    /// the `A,B,C,D` corner formula: `SAT[A] - SAT[B] - SAT[D] + SAT[C]`.
    #[must_use]
    pub fn rect_sum(&self, x: i32, y: i32, w: i32, h: i32) -> i64 {
        let stride = self.width + 1;
        let (x, y, w, h) = (x as usize, y as usize, w as usize, h as usize);
        let a = y * stride + x;
        let b = a + w;
        let d = a + h * stride;
        let c = d + w;
        self.data[a] - self.data[b] - self.data[d] + self.data[c]
    }
}

/// A rotated (45 degree) integral image for tilted Haar rectangles. Stored
/// unpadded at the source resolution: reads that would fall outside the
/// image (including the `y - 2` row the build recurrence needs) return 0
/// rather than indexing out of bounds.
#[derive(Debug, Clone)]
pub struct TiltedIntegralImage {
    data: Vec<i64>,
    width: usize,
    height: usize,
}

impl TiltedIntegralImage {
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Zero-extended read at a possibly out-of-range coordinate.
    #[must_use]
    pub fn at(&self, x: i32, y: i32) -> i64 {
        if self.in_bounds(x, y) {
            self.data[y as usize * self.width + x as usize]
        } else {
            0
        }
    }
}

fn gray_at(gray: &[u8], width: usize, height: usize, x: i32, y: i32) -> i64 {
    if x < 0 || y < 0 || x as usize >= width || y as usize >= height {
        0
    } else {
        i64::from(gray[y as usize * width + x as usize])
    }
}

fn build_tilted(gray: &[u8], width: usize, height: usize) -> TiltedIntegralImage {
    let mut img = TiltedIntegralImage { data: vec![0i64; width * height], width, height };

    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let p = gray_at(gray, width, height, x, y);
            let p_above = gray_at(gray, width, height, x, y - 1);
            let value =
                img.at(x - 1, y - 1) + img.at(x + 1, y - 1) - img.at(x, y - 2) + p + p_above;
            img.data[y as usize * width + x as usize] = value;
        }
    }

    img
}

/// The set of integral tables a single `detect()` call needs, built in one
/// pass per table over the grayscale (and, if requested, Sobel) plane.
#[derive(Debug, Clone)]
pub struct IntegralImages {
    pub sat: IntegralImage,
    pub squared: Option<IntegralImage>,
    pub tilted: Option<TiltedIntegralImage>,
    pub sobel: Option<IntegralImage>,
}

/// Build the requested integral tables for a grayscale plane. `sobel`
/// supplies the Sobel gradient magnitude plane (same dimensions) and is
/// required when `flags.sobel` is set.
#[must_use]
pub fn build(
    gray: &[u8],
    width: usize,
    height: usize,
    sobel: Option<&[u8]>,
    flags: BuildFlags,
) -> IntegralImages {
    let sat = IntegralImage::build(|x, y| i64::from(gray[y * width + x]), width, height);

    let squared = flags.squared.then(|| {
        IntegralImage::build(|x, y| {
            let p = i64::from(gray[y * width + x]);
            p * p
        }, width, height)
    });

    let tilted = flags.tilted.then(|| build_tilted(gray, width, height));

    let sobel = flags.sobel.then(|| {
        let plane = sobel.expect("sobel plane required when BuildFlags::sobel is set");
        IntegralImage::build(|x, y| i64::from(plane[y * width + x]), width, height)
    });

    IntegralImages { sat, squared, tilted, sobel }
}
