// this_file: crates/vectype-font/src/cff.rs

//! Compact Font Format outlines: INDEX/DICT containers and a Type 2
//! charstring interpreter producing cubic contours.

use std::ops::Range;
use std::sync::Arc;

use crate::error::{FontError, Result};
use crate::outline::{Outline, Point, Segment};
use crate::reader::Reader;

/// Operand stack limit from the Type 2 charstring spec.
const STACK_LIMIT: usize = 48;
/// Nested subroutine call limit.
const CALL_LIMIT: u32 = 10;

// Top DICT operators.
const OP_CHARSTRING_TYPE: u16 = 0x0c06;
const OP_CHARSTRINGS: u16 = 17;
const OP_PRIVATE: u16 = 18;
const OP_ROS: u16 = 0x0c1e;
const OP_FDARRAY: u16 = 0x0c24;
// Private DICT operators.
const OP_SUBRS: u16 = 19;
const OP_DEFAULT_WIDTH_X: u16 = 20;
const OP_NOMINAL_WIDTH_X: u16 = 21;

/// CFF outline backend. Offsets index into the shared font buffer so the
/// glyph data is never copied out of it.
#[derive(Debug, Clone)]
pub struct CffOutlines {
    data: Arc<[u8]>,
    /// Byte range of the `CFF ` table within `data`.
    table: Range<usize>,
    charstrings: Vec<Range<usize>>,
    global_subrs: Vec<Range<usize>>,
    local_subrs: Vec<Range<usize>>,
    default_width: f32,
    nominal_width: f32,
}

/// A decoded CFF glyph: the outline plus the width the charstring declared.
#[derive(Debug, Clone)]
pub struct CffGlyph {
    pub outline: Outline,
    pub width: f32,
}

impl CffOutlines {
    pub fn new(data: Arc<[u8]>, table: Range<usize>) -> Result<CffOutlines> {
        let bytes = &data[table.clone()];
        let mut r = Reader::new(bytes);
        r.skip(2)?; // major, minor version
        let header_size = r.read_u8()? as usize;
        r.skip(1)?; // offSize
        r.seek(header_size)?;

        let _names = read_index(&mut r)?;
        let top_dicts = read_index(&mut r)?;
        let _strings = read_index(&mut r)?;
        let global_subrs = read_index(&mut r)?;

        let top_range = top_dicts
            .first()
            .ok_or(FontError::UnsupportedFormat("empty CFF Top DICT INDEX"))?;
        let top = parse_dict(&bytes[top_range.clone()])?;

        if top.iter().any(|(op, _)| *op == OP_ROS || *op == OP_FDARRAY) {
            return Err(FontError::UnsupportedFormat("CID-keyed CFF"));
        }
        if let Some(v) = dict_value(&top, OP_CHARSTRING_TYPE) {
            if v[0] != 2.0 {
                return Err(FontError::UnsupportedFormat("charstring type"));
            }
        }

        let charstrings_offset = dict_value(&top, OP_CHARSTRINGS)
            .and_then(|v| v.first().copied())
            .ok_or(FontError::UnsupportedFormat("CFF without CharStrings"))?
            as usize;
        let mut cs_reader = Reader::new(bytes);
        cs_reader.seek(charstrings_offset)?;
        let charstrings = read_index(&mut cs_reader)?;

        let mut default_width = 0.0f32;
        let mut nominal_width = 0.0f32;
        let mut local_subrs = Vec::new();
        if let Some(private) = dict_value(&top, OP_PRIVATE) {
            if private.len() == 2 {
                let size = private[0] as usize;
                let offset = private[1] as usize;
                let pdict = parse_dict(
                    bytes
                        .get(offset..offset + size)
                        .ok_or(FontError::TruncatedTable)?,
                )?;
                if let Some(v) = dict_value(&pdict, OP_DEFAULT_WIDTH_X) {
                    default_width = v[0] as f32;
                }
                if let Some(v) = dict_value(&pdict, OP_NOMINAL_WIDTH_X) {
                    nominal_width = v[0] as f32;
                }
                if let Some(v) = dict_value(&pdict, OP_SUBRS) {
                    let mut sub_reader = Reader::new(bytes);
                    sub_reader.seek(offset + v[0] as usize)?;
                    local_subrs = read_index(&mut sub_reader)?;
                }
            }
        }

        Ok(CffOutlines {
            data,
            table,
            charstrings,
            global_subrs,
            local_subrs,
            default_width,
            nominal_width,
        })
    }

    pub fn num_glyphs(&self) -> u16 {
        self.charstrings.len() as u16
    }

    /// Interpret one glyph's charstring.
    pub fn glyph(&self, glyph_id: u16) -> Result<CffGlyph> {
        let range = self
            .charstrings
            .get(glyph_id as usize)
            .ok_or(FontError::BadGlyphId(glyph_id))?
            .clone();
        let bytes = &self.data[self.table.clone()];
        let mut vm = Vm {
            bytes,
            global_subrs: &self.global_subrs,
            local_subrs: &self.local_subrs,
            stack: Vec::with_capacity(STACK_LIMIT),
            segments: Vec::new(),
            pen: Point::default(),
            open: false,
            n_stems: 0,
            width: None,
            seen_clearing_op: false,
            ended: false,
        };
        vm.execute(&bytes[range], 0)?;
        if !vm.ended {
            log::warn!("charstring for glyph {glyph_id} has no endchar");
        }
        if vm.open {
            vm.segments.push(Segment::Close);
        }
        let width = match vm.width {
            Some(delta) => self.nominal_width + delta,
            None => self.default_width,
        };
        Ok(CffGlyph {
            outline: Outline::new(vm.segments),
            width,
        })
    }
}

/// Read a CFF INDEX at the reader's position, returning byte ranges
/// relative to the reader's region.
fn read_index(r: &mut Reader) -> Result<Vec<Range<usize>>> {
    let count = r.read_u16()? as usize;
    if count == 0 {
        return Ok(Vec::new());
    }
    let off_size = r.read_u8()?;
    let mut offsets = Vec::with_capacity(count + 1);
    for _ in 0..=count {
        let v = match off_size {
            1 => r.read_u8()? as u32,
            2 => r.read_u16()? as u32,
            3 => r.read_u24()?,
            4 => r.read_u32()?,
            _ => return Err(FontError::UnsupportedFormat("CFF INDEX offset size")),
        };
        offsets.push(v as usize);
    }
    // Object data begins here; offsets are 1-based from one byte before it.
    let base = r.pos() - 1;
    let mut ranges = Vec::with_capacity(count);
    for pair in offsets.windows(2) {
        let (start, end) = (base + pair[0], base + pair[1]);
        if start > end || end > r.len() {
            return Err(FontError::TruncatedTable);
        }
        ranges.push(start..end);
    }
    r.seek(base + offsets[count])?;
    Ok(ranges)
}

/// Parse a DICT region into (operator, operands) pairs. Two-byte operators
/// are keyed as `0x0c00 | second_byte`.
fn parse_dict(data: &[u8]) -> Result<Vec<(u16, Vec<f64>)>> {
    let mut r = Reader::new(data);
    let mut entries = Vec::new();
    let mut operands: Vec<f64> = Vec::new();
    while !r.at_end() {
        let b0 = r.read_u8()?;
        match b0 {
            0..=21 => {
                let op = if b0 == 12 {
                    0x0c00 | r.read_u8()? as u16
                } else {
                    b0 as u16
                };
                entries.push((op, std::mem::take(&mut operands)));
            }
            28 => operands.push(r.read_i16()? as f64),
            29 => operands.push(r.read_i32()? as f64),
            30 => operands.push(read_real(&mut r)?),
            32..=246 => operands.push(b0 as f64 - 139.0),
            247..=250 => {
                let b1 = r.read_u8()? as f64;
                operands.push((b0 as f64 - 247.0) * 256.0 + b1 + 108.0);
            }
            251..=254 => {
                let b1 = r.read_u8()? as f64;
                operands.push(-(b0 as f64 - 251.0) * 256.0 - b1 - 108.0);
            }
            _ => return Err(FontError::UnsupportedFormat("CFF DICT operand")),
        }
    }
    Ok(entries)
}

fn dict_value<'a>(dict: &'a [(u16, Vec<f64>)], op: u16) -> Option<&'a [f64]> {
    dict.iter()
        .find(|(k, v)| *k == op && !v.is_empty())
        .map(|(_, v)| v.as_slice())
}

/// Nibble-encoded real number.
fn read_real(r: &mut Reader) -> Result<f64> {
    let mut text = String::new();
    'outer: loop {
        let byte = r.read_u8()?;
        for nibble in [byte >> 4, byte & 0x0f] {
            match nibble {
                0..=9 => text.push((b'0' + nibble) as char),
                0x0a => text.push('.'),
                0x0b => text.push('E'),
                0x0c => text.push_str("E-"),
                0x0e => text.push('-'),
                0x0f => break 'outer,
                _ => return Err(FontError::UnsupportedFormat("CFF real number")),
            }
        }
    }
    text.parse()
        .map_err(|_| FontError::UnsupportedFormat("CFF real number"))
}

fn bias(subrs: &[Range<usize>]) -> i32 {
    if subrs.len() < 1240 {
        107
    } else if subrs.len() < 33900 {
        1131
    } else {
        32768
    }
}

/// Type 2 charstring interpreter state.
struct Vm<'a> {
    bytes: &'a [u8],
    global_subrs: &'a [Range<usize>],
    local_subrs: &'a [Range<usize>],
    stack: Vec<f32>,
    segments: Vec<Segment>,
    pen: Point,
    open: bool,
    n_stems: usize,
    width: Option<f32>,
    seen_clearing_op: bool,
    ended: bool,
}

impl Vm<'_> {
    fn execute(&mut self, charstring: &[u8], depth: u32) -> Result<()> {
        if depth > CALL_LIMIT {
            return Err(FontError::CharstringVm("subroutine depth exceeded"));
        }
        let mut r = Reader::new(charstring);
        while !r.at_end() && !self.ended {
            let b0 = r.read_u8()?;
            match b0 {
                // Operands.
                28 => self.push(r.read_i16()? as f32)?,
                32..=246 => self.push(b0 as f32 - 139.0)?,
                247..=250 => {
                    let b1 = r.read_u8()? as f32;
                    self.push((b0 as f32 - 247.0) * 256.0 + b1 + 108.0)?;
                }
                251..=254 => {
                    let b1 = r.read_u8()? as f32;
                    self.push(-(b0 as f32 - 251.0) * 256.0 - b1 - 108.0)?;
                }
                255 => self.push(r.read_i32()? as f32 / 65536.0)?,

                // Hints: counted so hintmask knows how many bytes to skip,
                // otherwise unused.
                1 | 3 | 18 | 23 => {
                    self.take_width(self.stack.len() % 2 == 1);
                    self.n_stems += self.stack.len() / 2;
                    self.stack.clear();
                }
                19 | 20 => {
                    // hintmask/cntrmask; leftover operands are an implied vstem
                    self.take_width(self.stack.len() % 2 == 1);
                    self.n_stems += self.stack.len() / 2;
                    self.stack.clear();
                    r.skip((self.n_stems + 7) / 8)?;
                }

                21 => {
                    // rmoveto
                    self.take_width(self.stack.len() > 2);
                    let [dx, dy] = self.args::<2>()?;
                    self.move_to(dx, dy);
                }
                22 => {
                    // hmoveto
                    self.take_width(self.stack.len() > 1);
                    let [dx] = self.args::<1>()?;
                    self.move_to(dx, 0.0);
                }
                4 => {
                    // vmoveto
                    self.take_width(self.stack.len() > 1);
                    let [dy] = self.args::<1>()?;
                    self.move_to(0.0, dy);
                }

                5 => {
                    // rlineto
                    let args = self.all_args(2)?;
                    for pair in args.chunks_exact(2) {
                        self.line_to(pair[0], pair[1]);
                    }
                }
                6 | 7 => {
                    // hlineto / vlineto: alternating axis lines
                    let mut horizontal = b0 == 6;
                    let args = self.all_args(1)?;
                    for &d in &args {
                        if horizontal {
                            self.line_to(d, 0.0);
                        } else {
                            self.line_to(0.0, d);
                        }
                        horizontal = !horizontal;
                    }
                }

                8 => {
                    // rrcurveto
                    let args = self.all_args(6)?;
                    for c in args.chunks_exact(6) {
                        self.curve(c[0], c[1], c[2], c[3], c[4], c[5]);
                    }
                }
                24 => {
                    // rcurveline: curves then one line
                    let args = self.all_args(2)?;
                    let (curves, line) = args.split_at(args.len() - 2);
                    for c in curves.chunks_exact(6) {
                        self.curve(c[0], c[1], c[2], c[3], c[4], c[5]);
                    }
                    self.line_to(line[0], line[1]);
                }
                25 => {
                    // rlinecurve: lines then one curve
                    let args = self.all_args(2)?;
                    if args.len() < 6 {
                        return Err(FontError::CharstringVm("operand stack underflow"));
                    }
                    let (lines, curve) = args.split_at(args.len() - 6);
                    for pair in lines.chunks_exact(2) {
                        self.line_to(pair[0], pair[1]);
                    }
                    self.curve(curve[0], curve[1], curve[2], curve[3], curve[4], curve[5]);
                }
                27 => {
                    // hhcurveto: optional leading dy, then horizontal curves
                    let mut args = self.all_args(1)?;
                    let mut dy = 0.0;
                    if args.len() % 4 == 1 {
                        dy = args.remove(0);
                    }
                    for c in args.chunks_exact(4) {
                        self.curve(c[0], dy, c[1], c[2], c[3], 0.0);
                        dy = 0.0;
                    }
                }
                26 => {
                    // vvcurveto: optional leading dx, then vertical curves
                    let mut args = self.all_args(1)?;
                    let mut dx = 0.0;
                    if args.len() % 4 == 1 {
                        dx = args.remove(0);
                    }
                    for c in args.chunks_exact(4) {
                        self.curve(dx, c[0], c[1], c[2], 0.0, c[3]);
                        dx = 0.0;
                    }
                }
                30 | 31 => {
                    // vhcurveto / hvcurveto: alternating tangents, the
                    // final curve may carry a fifth odd coordinate.
                    let mut horizontal = b0 == 31;
                    let args = self.all_args(1)?;
                    let mut rest = args.as_slice();
                    while rest.len() >= 4 {
                        let last = rest.len() == 5;
                        let extra = if last { rest[4] } else { 0.0 };
                        let (a, b, c, d) = (rest[0], rest[1], rest[2], rest[3]);
                        if horizontal {
                            self.curve(a, 0.0, b, c, extra, d);
                        } else {
                            self.curve(0.0, a, b, c, d, extra);
                        }
                        horizontal = !horizontal;
                        rest = &rest[if last { 5 } else { 4 }..];
                    }
                }

                10 | 29 => {
                    // callsubr / callgsubr
                    let idx = self
                        .stack
                        .pop()
                        .ok_or(FontError::CharstringVm("operand stack underflow"))?;
                    let subrs = if b0 == 10 {
                        self.local_subrs
                    } else {
                        self.global_subrs
                    };
                    let idx = idx as i32 + bias(subrs);
                    let range = usize::try_from(idx)
                        .ok()
                        .and_then(|i| subrs.get(i))
                        .ok_or(FontError::CharstringVm("subroutine index out of range"))?
                        .clone();
                    let sub = self
                        .bytes
                        .get(range)
                        .ok_or(FontError::CharstringVm("subroutine out of bounds"))?;
                    self.execute(sub, depth + 1)?;
                }
                11 => return Ok(()), // return

                14 => {
                    // endchar (the deprecated 4-argument seac form only
                    // contributes a width here)
                    self.take_width(self.stack.len() == 1 || self.stack.len() == 5);
                    self.stack.clear();
                    self.ended = true;
                }

                12 => {
                    let b1 = r.read_u8()?;
                    self.escape_op(b1)?;
                }
                _ => return Err(FontError::UnsupportedOp(b0 as u16)),
            }
        }
        Ok(())
    }

    fn escape_op(&mut self, b1: u8) -> Result<()> {
        match b1 {
            35 => {
                // flex: two curves, fd operand discarded
                let mut args = self.all_args(13)?;
                args.truncate(12);
                self.flex_pair(&args);
            }
            34 => {
                // hflex: horizontal variant, returns to the starting y
                let a = self.all_args(7)?;
                let args = [
                    a[0], 0.0, a[1], a[2], a[3], 0.0, a[4], 0.0, a[5], -a[2], a[6], 0.0,
                ];
                self.flex_pair(&args);
            }
            36 => {
                // hflex1: ends at the starting y
                let a = self.all_args(9)?;
                let dy6 = -(a[1] + a[3] + a[7]);
                let args = [
                    a[0], a[1], a[2], a[3], a[4], 0.0, a[5], 0.0, a[6], a[7], a[8], dy6,
                ];
                self.flex_pair(&args);
            }
            37 => {
                // flex1: the final coordinate follows the dominant axis
                let a = self.all_args(11)?;
                let dx: f32 = a[0] + a[2] + a[4] + a[6] + a[8];
                let dy: f32 = a[1] + a[3] + a[5] + a[7] + a[9];
                let (dx6, dy6) = if dx.abs() > dy.abs() {
                    (a[10], -dy)
                } else {
                    (-dx, a[10])
                };
                let args = [
                    a[0], a[1], a[2], a[3], a[4], a[5], a[6], a[7], a[8], a[9], dx6, dy6,
                ];
                self.flex_pair(&args);
            }
            _ => return Err(FontError::UnsupportedOp(0x0c00 | b1 as u16)),
        }
        Ok(())
    }

    fn push(&mut self, v: f32) -> Result<()> {
        if self.stack.len() >= STACK_LIMIT {
            return Err(FontError::CharstringVm("operand stack overflow"));
        }
        self.stack.push(v);
        Ok(())
    }

    /// Before the first stack-clearing operator, an odd leading operand is
    /// the glyph's width delta.
    fn take_width(&mut self, has_width: bool) {
        if !self.seen_clearing_op {
            self.seen_clearing_op = true;
            if has_width && !self.stack.is_empty() {
                self.width = Some(self.stack.remove(0));
            }
        }
    }

    fn args<const N: usize>(&mut self) -> Result<[f32; N]> {
        if self.stack.len() < N {
            return Err(FontError::CharstringVm("operand stack underflow"));
        }
        let start = self.stack.len() - N;
        let mut out = [0.0; N];
        out.copy_from_slice(&self.stack[start..]);
        self.stack.clear();
        Ok(out)
    }

    /// Drain the whole stack for a variadic operator, requiring at least
    /// `min` operands. Width consumption must already have happened.
    fn all_args(&mut self, min: usize) -> Result<Vec<f32>> {
        self.take_width(false);
        if self.stack.len() < min {
            return Err(FontError::CharstringVm("operand stack underflow"));
        }
        Ok(std::mem::take(&mut self.stack))
    }

    fn move_to(&mut self, dx: f32, dy: f32) {
        if self.open {
            self.segments.push(Segment::Close);
        }
        self.pen = self.pen + Point::new(dx, dy);
        self.segments.push(Segment::MoveTo(self.pen));
        self.open = true;
    }

    fn line_to(&mut self, dx: f32, dy: f32) {
        self.pen = self.pen + Point::new(dx, dy);
        self.segments.push(Segment::LineTo(self.pen));
    }

    fn curve(&mut self, dxa: f32, dya: f32, dxb: f32, dyb: f32, dxc: f32, dyc: f32) {
        let c1 = self.pen + Point::new(dxa, dya);
        let c2 = c1 + Point::new(dxb, dyb);
        self.pen = c2 + Point::new(dxc, dyc);
        self.segments.push(Segment::CubicTo(c1, c2, self.pen));
    }

    /// Two consecutive curves from 12 relative coordinates.
    fn flex_pair(&mut self, d: &[f32]) {
        self.curve(d[0], d[1], d[2], d[3], d[4], d[5]);
        self.curve(d[6], d[7], d[8], d[9], d[10], d[11]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::BBox;

    /// Encode a small integer as a charstring operand.
    fn num(v: i32, out: &mut Vec<u8>) {
        assert!((-107..=107).contains(&v), "test helper handles one byte");
        out.push((v + 139) as u8);
    }

    fn run(charstring: &[u8]) -> CffGlyph {
        let outlines = CffOutlines {
            data: Arc::from(charstring.to_vec().into_boxed_slice()),
            table: 0..charstring.len(),
            charstrings: vec![0..charstring.len()],
            global_subrs: Vec::new(),
            local_subrs: Vec::new(),
            default_width: 500.0,
            nominal_width: 400.0,
        };
        outlines.glyph(0).expect("charstring interpreted")
    }

    #[test]
    fn square_with_width() {
        // width 100 => 400 nominal + 100; then a 100x100 box
        let mut cs = Vec::new();
        num(100, &mut cs);
        num(10, &mut cs);
        num(10, &mut cs);
        cs.push(21); // rmoveto
        num(100, &mut cs);
        cs.push(6); // hlineto (alternates h,v,h...)
        num(100, &mut cs);
        num(-100, &mut cs);
        cs.push(5); // rlineto
        cs.push(14); // endchar
        let glyph = run(&cs);
        assert_eq!(glyph.width, 500.0);
        assert!(matches!(glyph.outline.segments[0], Segment::MoveTo(p) if p == Point::new(10.0, 10.0)));
        assert!(matches!(glyph.outline.segments.last(), Some(Segment::Close)));
    }

    #[test]
    fn default_width_applies_without_leading_operand() {
        let mut cs = Vec::new();
        num(0, &mut cs);
        num(0, &mut cs);
        cs.push(21); // rmoveto, exactly two args: no width
        cs.push(14);
        assert_eq!(run(&cs).width, 500.0);
    }

    #[test]
    fn alternating_hlineto_walks_both_axes() {
        let mut cs = Vec::new();
        num(0, &mut cs);
        num(0, &mut cs);
        cs.push(21);
        for v in [50, 60, -50] {
            num(v, &mut cs);
        }
        cs.push(6); // h, v, h
        cs.push(14);
        let glyph = run(&cs);
        assert_eq!(
            glyph.outline.segments,
            vec![
                Segment::MoveTo(Point::new(0.0, 0.0)),
                Segment::LineTo(Point::new(50.0, 0.0)),
                Segment::LineTo(Point::new(50.0, 60.0)),
                Segment::LineTo(Point::new(0.0, 60.0)),
                Segment::Close,
            ]
        );
    }

    #[test]
    fn rrcurveto_emits_cubics() {
        let mut cs = Vec::new();
        num(0, &mut cs);
        num(0, &mut cs);
        cs.push(21);
        for v in [10, 20, 30, 0, 10, -20] {
            num(v, &mut cs);
        }
        cs.push(8); // rrcurveto
        cs.push(14);
        let glyph = run(&cs);
        assert_eq!(
            glyph.outline.segments[1],
            Segment::CubicTo(
                Point::new(10.0, 20.0),
                Point::new(40.0, 20.0),
                Point::new(50.0, 0.0),
            )
        );
        assert_eq!(glyph.outline.bbox, BBox::new(0.0, 50.0, 0.0, 20.0));
    }

    #[test]
    fn hvcurveto_alternates_tangents() {
        let mut cs = Vec::new();
        num(0, &mut cs);
        num(0, &mut cs);
        cs.push(21);
        for v in [10, 5, 5, 10, 10, 5, 5, 10] {
            num(v, &mut cs);
        }
        cs.push(31); // hvcurveto: first starts horizontal, second vertical
        cs.push(14);
        let glyph = run(&cs);
        let segs = &glyph.outline.segments;
        assert_eq!(
            segs[1],
            Segment::CubicTo(
                Point::new(10.0, 0.0),
                Point::new(15.0, 5.0),
                Point::new(15.0, 15.0),
            )
        );
        assert_eq!(
            segs[2],
            Segment::CubicTo(
                Point::new(15.0, 25.0),
                Point::new(20.0, 30.0),
                Point::new(30.0, 30.0),
            )
        );
    }

    #[test]
    fn stack_overflow_faults() {
        let mut cs = Vec::new();
        for _ in 0..(STACK_LIMIT + 1) {
            num(1, &mut cs);
        }
        cs.push(14);
        let outlines = CffOutlines {
            data: Arc::from(cs.clone().into_boxed_slice()),
            table: 0..cs.len(),
            charstrings: vec![0..cs.len()],
            global_subrs: Vec::new(),
            local_subrs: Vec::new(),
            default_width: 0.0,
            nominal_width: 0.0,
        };
        assert!(matches!(
            outlines.glyph(0),
            Err(FontError::CharstringVm("operand stack overflow"))
        ));
    }

    #[test]
    fn unknown_operator_is_reported() {
        let cs = vec![(139) as u8, (139) as u8, 21, 12, 99];
        let outlines = CffOutlines {
            data: Arc::from(cs.clone().into_boxed_slice()),
            table: 0..cs.len(),
            charstrings: vec![0..cs.len()],
            global_subrs: Vec::new(),
            local_subrs: Vec::new(),
            default_width: 0.0,
            nominal_width: 0.0,
        };
        assert!(matches!(
            outlines.glyph(0),
            Err(FontError::UnsupportedOp(0x0c63))
        ));
    }
}
