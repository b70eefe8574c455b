#![allow(clippy::module_name_repetitions)]
//! Pretty printing of an [`Array3D`], one boxed grid per axis 0 plane.
//! Useful for debugging and visualizing the contents of an array.

use std::fmt::{self, Write};

use crate::array::Array3D;

const PRECISION: usize = 3;

const RESET_TEXT: &str = "\x1b[0m";
const RED_TEXT: &str = "\x1b[31m";
const GREEN_TEXT: &str = "\x1b[32m";
const YELLOW_TEXT: &str = "\x1b[33m";
const MAGENTA_TEXT: &str = "\x1b[35m";
const CYAN_TEXT: &str = "\x1b[36m";

const BAR: char = '│';
const UPPER_LEFT_CORNER: char = '╭';
const UPPER_RIGHT_CORNER: char = '╮';
const LOWER_LEFT_CORNER: char = '╰';
const LOWER_RIGHT_CORNER: char = '╯';

/// Count the number of integral digits in a floating point number, including
/// a leading minus sign. Used to size the cells of the grid.
/// ```
/// use array3d::pretty_print::num_of_integral_digits;
/// assert_eq!(num_of_integral_digits(0.0), Some(1));
/// assert_eq!(num_of_integral_digits(10.0), Some(2));
/// assert_eq!(num_of_integral_digits(-10.0), Some(3));
/// assert_eq!(num_of_integral_digits(1e-5), Some(1));
/// assert_eq!(num_of_integral_digits(f64::NAN), None);
/// assert_eq!(num_of_integral_digits(f64::NEG_INFINITY), None);
/// ```
#[must_use]
pub fn num_of_integral_digits(mut f: f64) -> Option<usize> {
    if !f.is_finite() {
        return None;
    }

    let mut count = 0_usize;
    if f.is_sign_negative() {
        f = -f;
        count += 1;
    }
    if f < 1.0 {
        count += 1;
    }
    while f >= 1.0 {
        f /= 10.0;
        count += 1;
    }

    Some(count)
}

/// Map a floating point number to an ansi color string.
fn float_color(f: f64) -> &'static str {
    if f.is_nan() {
        MAGENTA_TEXT
    } else if f.is_infinite() {
        YELLOW_TEXT
    } else if f.is_sign_negative() {
        RED_TEXT
    } else if f > 0.0 {
        GREEN_TEXT
    } else {
        RESET_TEXT
    }
}

/// Width of a single cell, wide enough for every element of `array`.
fn cell_width(array: &Array3D) -> usize {
    const INTEGRAL_DIGITS_LIMIT: usize = 9;

    let widest = array
        .as_slice()
        .iter()
        .map(|&x| num_of_integral_digits(x).unwrap_or(0) + 1)
        .max()
        .unwrap_or(0);
    // enough for "NaN", "inf" and "-inf"
    let widest = if widest == 0 { 5 } else { widest };

    widest.min(INTEGRAL_DIGITS_LIMIT) + 1 + PRECISION
}

/// [`Display`](fmt::Display) adapter returned by [`Array3D::pretty`].
#[derive(Debug, Clone, Copy)]
pub struct Pretty<'a> {
    array:   &'a Array3D,
    name:    Option<&'a str>,
    colored: bool,
}

impl<'a> Pretty<'a> {
    /// Label every plane with `name` instead of the default label.
    #[must_use]
    pub const fn name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    /// Render without ansi color codes.
    #[must_use]
    pub const fn plain(mut self) -> Self {
        self.colored = false;
        self
    }

    const fn color(&self, code: &'static str) -> &'static str {
        if self.colored {
            code
        } else {
            ""
        }
    }

    fn write_plane(&self, f: &mut fmt::Formatter<'_>, i: usize, cell_width: usize) -> fmt::Result {
        let dims = self.array.dims();
        let (nrows, ncols) = (dims.d1(), dims.d2());
        let reset = self.color(RESET_TEXT);

        let right_padding = cell_width / 2;
        let total_width = ncols * cell_width + right_padding;
        let horizontal_line = "─".repeat(total_width);
        let shape = format!("{nrows}x{ncols}");
        let title = self
            .name
            .map_or_else(|| format!("slice i = {i}"), |name| format!("{name}[{i}]"));

        // top border
        let (cyan, magenta) = (self.color(CYAN_TEXT), self.color(MAGENTA_TEXT));
        if title.chars().count() + shape.len() > total_width {
            writeln!(f, "{cyan}{title}{reset}:{magenta}{shape}{reset}")?;
            writeln!(f, "{UPPER_LEFT_CORNER}{horizontal_line}{UPPER_RIGHT_CORNER}")?;
        } else {
            let fill = "─".repeat(total_width - title.chars().count() - shape.len());
            writeln!(
                f,
                "{UPPER_LEFT_CORNER}{cyan}{title}{reset}{fill}{magenta}{shape}{reset}{UPPER_RIGHT_CORNER}"
            )?;
        }

        for j in 0..nrows {
            f.write_char(BAR)?;
            for k in 0..ncols {
                let x = self.array[(i, j, k)];
                let color = self.color(float_color(x));
                if x.abs() > 1e6 {
                    write!(f, "{color}{x:cell_width$.PRECISION$e}{reset}")?;
                } else {
                    write!(f, "{color}{x:cell_width$.PRECISION$}{reset}")?;
                }
            }
            writeln!(f, "{}{BAR}", " ".repeat(right_padding))?;
        }

        writeln!(f, "{LOWER_LEFT_CORNER}{horizontal_line}{LOWER_RIGHT_CORNER}")
    }
}

impl fmt::Display for Pretty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dims = self.array.dims();
        if dims.d0() == 0 {
            return writeln!(f, "empty array {dims}");
        }

        let cell_width = cell_width(self.array);
        for i in 0..dims.d0() {
            self.write_plane(f, i, cell_width)?;
        }
        Ok(())
    }
}

impl Array3D {
    /// Colored, boxed rendering of every axis 0 plane.
    ///
    /// ```
    /// use array3d::Array3D;
    ///
    /// let array = Array3D::filled(2, 1, 2, 1.5)?;
    /// let text = array.pretty().name("a").plain().to_string();
    /// assert!(text.contains("a[1]"));
    /// assert!(text.contains("1.500"));
    /// # Ok::<(), array3d::Array3DError>(())
    /// ```
    #[must_use]
    pub const fn pretty(&self) -> Pretty<'_> {
        Pretty {
            array:   self,
            name:    None,
            colored: true,
        }
    }

    /// Print [`Array3D::pretty`] to stdout.
    pub fn pretty_print(&self) {
        print!("{}", self.pretty());
    }
}

/// Pretty prints an [`Array3D`] to stdout, preceded by the file and line of
/// the call.
#[macro_export]
macro_rules! pretty_print_array3d {
    ($array:expr) => {
        println!("{}:\x1b[33m{}\x1b[0m", file!(), line!());
        print!("{}", $crate::Array3D::pretty($array).name(stringify!($array)));
    };
    ($name:literal, $array:expr) => {
        println!("{}:\x1b[33m{}\x1b[0m", file!(), line!());
        print!("{}", $crate::Array3D::pretty($array).name($name));
    };
}

impl fmt::Display for Array3D {
    /// Plain dump, axis 0 plane by axis 0 plane, each as `d1` rows of `d2`
    /// space separated values with a blank line after each plane.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dims = self.dims();
        for i in 0..dims.d0() {
            writeln!(f, "slice i = {i}:")?;
            for j in 0..dims.d1() {
                for k in 0..dims.d2() {
                    if k > 0 {
                        f.write_char(' ')?;
                    }
                    write!(f, "{}", self[(i, j, k)])?;
                }
                writeln!(f)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_dumps_planes_in_order() {
        let mut array = Array3D::new(2, 2, 3).unwrap();
        array.ones();
        array.set(1, 0, 2, 5.0).unwrap();

        assert_eq!(
            array.to_string(),
            "slice i = 0:\n1 1 1\n1 1 1\n\nslice i = 1:\n1 1 5\n1 1 1\n\n"
        );
    }

    #[test]
    fn display_of_empty_array_is_empty() {
        assert_eq!(Array3D::new(0, 2, 2).unwrap().to_string(), "");
        assert_eq!(
            Array3D::new(1, 0, 2).unwrap().to_string(),
            "slice i = 0:\n\n"
        );
    }

    #[test]
    fn pretty_plain_has_one_box_per_plane() {
        let array = Array3D::filled(3, 2, 2, -2.0).unwrap();
        let text = array.pretty().plain().to_string();

        assert_eq!(text.matches(UPPER_LEFT_CORNER).count(), 3);
        assert_eq!(text.matches(LOWER_RIGHT_CORNER).count(), 3);
        assert_eq!(text.matches("-2.000").count(), 12);
        assert!(text.contains("slice i = 2"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn pretty_rows_have_equal_width() {
        let mut array = Array3D::new(1, 3, 2).unwrap();
        array.set(0, 1, 1, 12345.0).unwrap();
        array.set(0, 2, 0, -0.5).unwrap();
        let text = array.pretty().plain().to_string();

        let widths: Vec<usize> = text.lines().map(|line| line.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{widths:?}");
    }

    #[test]
    fn pretty_colors_by_sign() {
        let array = Array3D::filled(1, 1, 1, -1.0).unwrap();
        assert!(array.pretty().to_string().contains(RED_TEXT));
        let array = Array3D::filled(1, 1, 1, 1.0).unwrap();
        assert!(array.pretty().to_string().contains(GREEN_TEXT));
    }

    #[test]
    fn pretty_of_empty_array() {
        let array = Array3D::new(0, 1, 1).unwrap();
        assert_eq!(array.pretty().to_string(), "empty array 0x1x1\n");
    }

    #[test]
    fn integral_digits() {
        assert_eq!(num_of_integral_digits(123.456), Some(3));
        assert_eq!(num_of_integral_digits(-0.25), Some(2));
        assert_eq!(num_of_integral_digits(f64::INFINITY), None);
    }

    #[test]
    fn cell_width_is_capped() {
        let array = Array3D::filled(1, 1, 1, 1e12).unwrap();
        assert_eq!(cell_width(&array), 9 + 1 + PRECISION);
    }
}
