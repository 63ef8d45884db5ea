// this_file: crates/vectype-font/src/sfnt.rs

//! SFNT container: the table directory shared by TrueType and OpenType.

use crate::error::{FontError, Result};
use crate::reader::Reader;
use crate::tag::Tag;

const SFNT_TRUETYPE: u32 = 0x0001_0000;
const SFNT_TRUE: u32 = u32::from_be_bytes(*b"true");
const SFNT_OTTO: u32 = u32::from_be_bytes(*b"OTTO");
const SFNT_TYP1: u32 = u32::from_be_bytes(*b"typ1");

/// One entry of the table directory.
#[derive(Debug, Clone, Copy)]
pub struct TableRecord {
    pub tag: Tag,
    pub checksum: u32,
    pub offset: u32,
    pub length: u32,
}

/// Parsed table directory of an SFNT file.
///
/// Holds the directory records only; table contents are borrowed from the
/// file buffer on demand via [`Sfnt::table`].
#[derive(Debug, Clone)]
pub struct Sfnt {
    pub scaler: u32,
    records: Vec<TableRecord>,
}

impl Sfnt {
    /// Parse the 12-byte header and directory records, rejecting files
    /// whose tables extend beyond the end of the buffer.
    pub fn parse(data: &[u8]) -> Result<Sfnt> {
        let mut r = Reader::new(data);
        let scaler = r.read_u32()?;
        if !matches!(scaler, SFNT_TRUETYPE | SFNT_TRUE | SFNT_OTTO | SFNT_TYP1) {
            return Err(FontError::BadSignature(scaler));
        }
        let num_tables = r.read_u16()?;
        r.skip(6)?; // searchRange, entrySelector, rangeShift

        let mut records = Vec::with_capacity(num_tables as usize);
        for _ in 0..num_tables {
            let rec = TableRecord {
                tag: r.read_tag()?,
                checksum: r.read_u32()?,
                offset: r.read_u32()?,
                length: r.read_u32()?,
            };
            let end = (rec.offset as u64) + (rec.length as u64);
            if end > data.len() as u64 {
                return Err(FontError::TruncatedTable);
            }
            records.push(rec);
        }
        Ok(Sfnt { scaler, records })
    }

    pub fn record(&self, tag: Tag) -> Option<&TableRecord> {
        self.records.iter().find(|r| r.tag == tag)
    }

    /// Borrow a table's bytes, or `None` if the font does not carry it.
    pub fn table<'a>(&self, data: &'a [u8], tag: Tag) -> Option<&'a [u8]> {
        let rec = self.record(tag)?;
        data.get(rec.offset as usize..(rec.offset + rec.length) as usize)
    }

    /// Like [`Sfnt::table`] but required: absence is an error naming the tag.
    pub fn expect_table<'a>(&self, data: &'a [u8], tag: Tag) -> Result<&'a [u8]> {
        self.table(data, tag)
            .ok_or(FontError::MissingRequiredTable(tag))
    }

    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.records.iter().map(|r| r.tag)
    }

    /// Verify the directory checksum of every table except `head`, whose
    /// stored sum is invalidated by its own checksum-adjustment field.
    pub fn verify_checksums(&self, data: &[u8]) -> Result<()> {
        for rec in &self.records {
            if rec.tag == Tag::new(b"head") {
                continue;
            }
            let bytes = self
                .table(data, rec.tag)
                .ok_or(FontError::TruncatedTable)?;
            let computed = table_checksum(bytes);
            if computed != rec.checksum {
                return Err(FontError::ChecksumMismatch {
                    table: rec.tag,
                    computed,
                    stored: rec.checksum,
                });
            }
        }
        Ok(())
    }
}

/// Sum of the table as big-endian u32 words, zero-padded to a multiple of
/// four, truncated to 32 bits.
pub fn table_checksum(bytes: &[u8]) -> u32 {
    let mut sum: u32 = 0;
    let mut chunks = bytes.chunks_exact(4);
    for chunk in &mut chunks {
        sum = sum.wrapping_add(u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
    }
    let rem = chunks.remainder();
    if !rem.is_empty() {
        let mut last = [0u8; 4];
        last[..rem.len()].copy_from_slice(rem);
        sum = sum.wrapping_add(u32::from_be_bytes(last));
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory(scaler: u32, tables: &[(Tag, &[u8])]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&scaler.to_be_bytes());
        out.extend_from_slice(&(tables.len() as u16).to_be_bytes());
        out.extend_from_slice(&[0u8; 6]);
        let mut offset = 12 + 16 * tables.len() as u32;
        for (tag, bytes) in tables {
            out.extend_from_slice(&tag.0);
            out.extend_from_slice(&table_checksum(bytes).to_be_bytes());
            out.extend_from_slice(&offset.to_be_bytes());
            out.extend_from_slice(&(bytes.len() as u32).to_be_bytes());
            offset += bytes.len() as u32;
        }
        for (_, bytes) in tables {
            out.extend_from_slice(bytes);
        }
        out
    }

    #[test]
    fn parses_directory_and_locates_tables() {
        let data = directory(0x0001_0000, &[(Tag::new(b"abcd"), &[1, 2, 3, 4])]);
        let sfnt = Sfnt::parse(&data).unwrap();
        assert_eq!(sfnt.table(&data, Tag::new(b"abcd")), Some(&[1u8, 2, 3, 4][..]));
        assert_eq!(sfnt.table(&data, Tag::new(b"zzzz")), None);
    }

    #[test]
    fn rejects_unknown_scaler() {
        let data = directory(0xdead_beef, &[]);
        assert!(matches!(
            Sfnt::parse(&data),
            Err(FontError::BadSignature(0xdead_beef))
        ));
    }

    #[test]
    fn rejects_table_past_eof() {
        let mut data = directory(0x0001_0000, &[(Tag::new(b"abcd"), &[1, 2, 3, 4])]);
        data.truncate(data.len() - 1);
        assert!(matches!(Sfnt::parse(&data), Err(FontError::TruncatedTable)));
    }

    #[test]
    fn checksum_pads_to_word_boundary() {
        assert_eq!(table_checksum(&[0, 0, 0, 1]), 1);
        assert_eq!(table_checksum(&[0, 0, 0, 1, 0x80]), 0x8000_0001);
    }

    #[test]
    fn verify_checksums_flags_corruption() {
        let mut data = directory(0x0001_0000, &[(Tag::new(b"abcd"), &[1, 2, 3, 4])]);
        let sfnt = Sfnt::parse(&data).unwrap();
        sfnt.verify_checksums(&data).unwrap();
        let last = data.len() - 1;
        data[last] ^= 0xff;
        assert!(matches!(
            sfnt.verify_checksums(&data),
            Err(FontError::ChecksumMismatch { .. })
        ));
    }
}
