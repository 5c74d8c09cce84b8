//! Rendering values into fixed-capacity buffers.
//!
//! [`to_text`] renders any [`ToText`] value into a `FixedText<FMT_CAPACITY>`.
//! Decorators ([`hex`], [`bin`], [`pad_left`]) wrap a value and are
//! themselves `ToText`, so they nest: `to_text(pad_left(hex(7), 6))`.
//! Like every other write, rendering into an undersized buffer clamps.

use crate::text::FixedText;

/// Capacity of the buffers returned by [`to_text`]. Covers every decimal,
/// hex and float rendering of the primitive types; a full-width 64-bit
/// binary rendering is the one case that exceeds it and clamps, use
/// [`to_text_sized`] with a wider buffer for those.
pub const FMT_CAPACITY: usize = 64;

/// Fractional digits rendered for floats by default.
pub const DEFAULT_PRECISION: usize = 6;

/// A value that can render itself into a fixed-capacity buffer.
pub trait ToText {
    /// Appends the rendering to `out`, clamping on overflow.
    fn write_text<const N: usize>(&self, out: &mut FixedText<N>);
}

/// Renders `value` into a default-capacity buffer.
///
/// ```
/// use fixtext::{hex, pad_left, to_text};
///
/// assert_eq!(to_text(42), "42");
/// assert_eq!(to_text(hex(255u8)), "0xff");
/// assert_eq!(to_text(pad_left(7, 3)), "007");
/// ```
#[must_use]
pub fn to_text<T: ToText>(value: T) -> FixedText<FMT_CAPACITY> {
    to_text_sized(value)
}

/// Renders `value` into a buffer of the capacity chosen at the call site.
#[must_use]
pub fn to_text_sized<const N: usize, T: ToText>(value: T) -> FixedText<N> {
    let mut out = FixedText::new();
    value.write_text(&mut out);
    out
}

/// Renders a float with an explicit number of fractional digits.
#[must_use]
pub fn to_text_precision(value: f64, precision: usize) -> FixedText<FMT_CAPACITY> {
    let mut out = FixedText::new();
    write_float(&mut out, value, precision);
    out
}

/// A value with a defined bit pattern, for radix renderings. Signed values
/// expose their two's-complement pattern at their own width, so
/// `hex(-1i8)` renders `0xff`, not a 128-bit mask.
pub trait Bits: Copy {
    /// The value's bit pattern, zero-extended to 128 bits.
    fn bits(self) -> u128;
}

macro_rules! int_to_text {
    ($($t:ty => $u:ty),* $(,)?) => {$(
        impl ToText for $t {
            fn write_text<const N: usize>(&self, out: &mut FixedText<N>) {
                let mut buf = itoa::Buffer::new();
                out.push_str(buf.format(*self));
            }
        }

        impl Bits for $t {
            // Reinterpret at the operand's own width, then zero-extend, so
            // pointer-sized values render 32 or 64 bits per target.
            #[allow(clippy::cast_sign_loss, clippy::cast_lossless)]
            fn bits(self) -> u128 {
                (self as $u) as u128
            }
        }
    )*};
}

int_to_text! {
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    isize => usize,
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    usize => usize,
}

impl ToText for bool {
    fn write_text<const N: usize>(&self, out: &mut FixedText<N>) {
        out.push_str(if *self { "true" } else { "false" });
    }
}

impl ToText for f64 {
    fn write_text<const N: usize>(&self, out: &mut FixedText<N>) {
        write_float(out, *self, DEFAULT_PRECISION);
    }
}

impl ToText for f32 {
    fn write_text<const N: usize>(&self, out: &mut FixedText<N>) {
        write_float(out, f64::from(*self), DEFAULT_PRECISION);
    }
}

impl ToText for str {
    fn write_text<const N: usize>(&self, out: &mut FixedText<N>) {
        out.push_str(self);
    }
}

impl<const M: usize> ToText for FixedText<M> {
    fn write_text<const N: usize>(&self, out: &mut FixedText<N>) {
        out.push_str(self.as_str());
    }
}

impl<T: ToText + ?Sized> ToText for &T {
    fn write_text<const N: usize>(&self, out: &mut FixedText<N>) {
        (**self).write_text(out);
    }
}

/// Hexadecimal rendering with a `0x` prefix. See [`hex`] and [`hex_upper`].
#[derive(Debug, Clone, Copy)]
pub struct Hex<T> {
    value: T,
    uppercase: bool,
}

/// Binary rendering with a `0b` prefix. See [`bin`].
#[derive(Debug, Clone, Copy)]
pub struct Bin<T> {
    value: T,
}

/// Left-pads a rendering to a minimum width. See [`pad_left`].
#[derive(Debug, Clone, Copy)]
pub struct PadLeft<T> {
    value: T,
    width: usize,
    fill: char,
}

/// Renders `value` as lowercase hexadecimal with a `0x` prefix.
#[must_use]
pub fn hex<T: Bits>(value: T) -> Hex<T> {
    Hex {
        value,
        uppercase: false,
    }
}

/// Renders `value` as uppercase hexadecimal with a `0x` prefix.
#[must_use]
pub fn hex_upper<T: Bits>(value: T) -> Hex<T> {
    Hex {
        value,
        uppercase: true,
    }
}

/// Renders `value` as binary with a `0b` prefix.
#[must_use]
pub fn bin<T: Bits>(value: T) -> Bin<T> {
    Bin { value }
}

/// Pads the rendering of `value` with `'0'` to at least `width` characters.
/// A rendering already at or past `width` is untouched.
#[must_use]
pub fn pad_left<T: ToText>(value: T, width: usize) -> PadLeft<T> {
    pad_left_with(value, width, '0')
}

/// Like [`pad_left`] with an explicit fill character.
#[must_use]
pub fn pad_left_with<T: ToText>(value: T, width: usize, fill: char) -> PadLeft<T> {
    PadLeft { value, width, fill }
}

impl<T: Bits> ToText for Hex<T> {
    fn write_text<const N: usize>(&self, out: &mut FixedText<N>) {
        out.push_str("0x");
        write_radix(out, self.value.bits(), 16, self.uppercase);
    }
}

impl<T: Bits> ToText for Bin<T> {
    fn write_text<const N: usize>(&self, out: &mut FixedText<N>) {
        out.push_str("0b");
        write_radix(out, self.value.bits(), 2, false);
    }
}

impl<T: ToText> ToText for PadLeft<T> {
    fn write_text<const N: usize>(&self, out: &mut FixedText<N>) {
        let rendered: FixedText<FMT_CAPACITY> = to_text_sized(&self.value);
        for _ in rendered.len()..self.width {
            out.push(self.fill);
        }
        out.push_str(rendered.as_str());
    }
}

const DIGITS_LOWER: &[u8; 16] = b"0123456789abcdef";
const DIGITS_UPPER: &[u8; 16] = b"0123456789ABCDEF";

fn write_radix<const N: usize>(out: &mut FixedText<N>, value: u128, radix: u128, uppercase: bool) {
    let digits = if uppercase { DIGITS_UPPER } else { DIGITS_LOWER };
    // 128 binary digits is the worst case.
    let mut tmp = [0u8; 128];
    let mut pos = tmp.len();
    let mut v = value;
    loop {
        pos -= 1;
        #[allow(clippy::cast_possible_truncation)]
        let digit = (v % radix) as usize;
        tmp[pos] = digits[digit];
        v /= radix;
        if v == 0 {
            break;
        }
    }
    for &b in &tmp[pos..] {
        out.push(b as char);
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn write_float<const N: usize>(out: &mut FixedText<N>, value: f64, precision: usize) {
    if value.is_nan() {
        out.push_str("nan");
        return;
    }
    if value.is_infinite() {
        out.push_str(if value < 0.0 { "-inf" } else { "inf" });
        return;
    }
    let mut v = value;
    if v < 0.0 {
        out.push('-');
        v = -v;
    }
    let int_part = v as i64;
    let mut buf = itoa::Buffer::new();
    out.push_str(buf.format(int_part));
    if precision == 0 {
        return;
    }
    out.push('.');
    #[allow(clippy::cast_precision_loss)]
    let mut frac = v - int_part as f64;
    for _ in 0..precision {
        frac *= 10.0;
        let digit = frac as u8;
        out.push((b'0' + digit) as char);
        frac -= f64::from(digit);
    }
}
