//! `name` — human-readable font names.
//!
//! Records are selected with preference 3/1 (Windows, Unicode BMP) then
//! 1/0 (Macintosh Roman); Windows strings are UTF-16BE, Mac strings are
//! decoded as Mac Roman's ASCII subset.

use crate::error::Result;
use crate::reader::Reader;

const PLATFORM_MAC: u16 = 1;
const PLATFORM_WINDOWS: u16 = 3;

/// The name IDs this crate exposes (everything below 16).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontNames {
    pub copyright: String,
    pub family: String,
    pub subfamily: String,
    pub unique_id: String,
    pub full_name: String,
    pub version: String,
    pub postscript: String,
    pub trademark: String,
    pub manufacturer: String,
    pub designer: String,
    pub description: String,
    pub vendor_url: String,
    pub designer_url: String,
    pub license: String,
    pub license_url: String,
}

impl FontNames {
    pub fn parse(data: &[u8]) -> Result<FontNames> {
        let mut r = Reader::new(data);
        let format = r.read_u16()?;
        let mut names = FontNames::default();
        if format > 1 {
            // format 1 adds langTagRecords after the name records; both
            // share the layout read here. Anything else we leave empty.
            return Ok(names);
        }
        let count = r.read_u16()?;
        let string_offset = r.read_u16()? as usize;

        struct Record {
            platform: u16,
            encoding: u16,
            name_id: u16,
            length: u16,
            offset: u16,
        }
        let mut records = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let platform = r.read_u16()?;
            let encoding = r.read_u16()?;
            r.skip(2)?; // language
            let name_id = r.read_u16()?;
            let length = r.read_u16()?;
            let offset = r.read_u16()?;
            records.push(Record {
                platform,
                encoding,
                name_id,
                length,
                offset,
            });
        }

        // Two passes: Mac Roman first, then Windows Unicode overrides it.
        for pass in [(PLATFORM_MAC, 0u16), (PLATFORM_WINDOWS, 1u16)] {
            for rec in &records {
                if (rec.platform, rec.encoding) != pass || rec.name_id >= 16 {
                    continue;
                }
                let start = string_offset + rec.offset as usize;
                let Ok(bytes) = r.slice(start, rec.length as usize) else {
                    continue;
                };
                let text = if rec.platform == PLATFORM_WINDOWS {
                    decode_utf16_be(bytes.data())
                } else {
                    decode_mac_roman(bytes.data())
                };
                names.set(rec.name_id, text);
            }
        }
        Ok(names)
    }

    fn set(&mut self, name_id: u16, value: String) {
        let slot = match name_id {
            0 => &mut self.copyright,
            1 => &mut self.family,
            2 => &mut self.subfamily,
            3 => &mut self.unique_id,
            4 => &mut self.full_name,
            5 => &mut self.version,
            6 => &mut self.postscript,
            7 => &mut self.trademark,
            8 => &mut self.manufacturer,
            9 => &mut self.designer,
            10 => &mut self.description,
            11 => &mut self.vendor_url,
            12 => &mut self.designer_url,
            13 => &mut self.license,
            14 => &mut self.license_url,
            _ => return,
        };
        *slot = value;
    }
}

fn decode_utf16_be(bytes: &[u8]) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|c| u16::from_be_bytes([c[0], c[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}

fn decode_mac_roman(bytes: &[u8]) -> String {
    // Mac Roman agrees with ASCII below 0x80; the high half is rare in
    // name records, so it is replaced rather than mapped.
    bytes
        .iter()
        .map(|&b| if b < 0x80 { b as char } else { '\u{fffd}' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_table(records: &[(u16, u16, u16, &str)]) -> Vec<u8> {
        // (platform, encoding, name_id, text); strings stored per-record
        let mut strings = Vec::new();
        let mut recs = Vec::new();
        for &(platform, encoding, name_id, text) in records {
            let offset = strings.len() as u16;
            let encoded: Vec<u8> = if platform == PLATFORM_WINDOWS {
                text.encode_utf16().flat_map(|u| u.to_be_bytes()).collect()
            } else {
                text.bytes().collect()
            };
            recs.push((platform, encoding, name_id, encoded.len() as u16, offset));
            strings.extend_from_slice(&encoded);
        }

        let mut out = Vec::new();
        out.extend_from_slice(&0u16.to_be_bytes()); // format
        out.extend_from_slice(&(recs.len() as u16).to_be_bytes());
        let string_offset = 6 + 12 * recs.len() as u16;
        out.extend_from_slice(&string_offset.to_be_bytes());
        for (platform, encoding, name_id, length, offset) in recs {
            out.extend_from_slice(&platform.to_be_bytes());
            out.extend_from_slice(&encoding.to_be_bytes());
            out.extend_from_slice(&0u16.to_be_bytes()); // language
            out.extend_from_slice(&name_id.to_be_bytes());
            out.extend_from_slice(&length.to_be_bytes());
            out.extend_from_slice(&offset.to_be_bytes());
        }
        out.extend_from_slice(&strings);
        out
    }

    #[test]
    fn windows_records_override_mac() {
        let data = name_table(&[
            (PLATFORM_MAC, 0, 1, "Mac Family"),
            (PLATFORM_WINDOWS, 1, 1, "Win Family"),
            (PLATFORM_MAC, 0, 2, "Regular"),
        ]);
        let names = FontNames::parse(&data).unwrap();
        assert_eq!(names.family, "Win Family");
        assert_eq!(names.subfamily, "Regular");
    }

    #[test]
    fn high_name_ids_are_ignored() {
        let data = name_table(&[(PLATFORM_WINDOWS, 1, 19, "sample text")]);
        let names = FontNames::parse(&data).unwrap();
        assert_eq!(names, FontNames::default());
    }
}
