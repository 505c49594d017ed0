//! # Sound Open Firmware Blobs
//!
//! Decoders for the binary blobs exchanged with Sound Open Firmware. Every
//! blob starts with an ABI header that declares the size of its payload.
//! Topology files further carry a manifest: an ABI version followed by a
//! list of type-length-value records.
//!
//! Declared sizes come from files and firmware and are checked against the
//! input before any data is handed out. A record never extends past the
//! region that contains it.

use uapi::ffi::linux::native::sound::sof as sys;

// SAFETY: Integer-only firmware structures without padding.
unsafe impl crate::Plain for sys::AbiHdr {}
unsafe impl crate::Plain for sys::ManifestTlv {}
unsafe impl crate::Plain for sys::Manifest {}

// The version triple, which is all a manifest must carry.
const MANIFEST_VERSION_SIZE: usize = 6;

/// Errors of the SOF decoders.
#[derive(Clone, Copy, Debug, Hash)]
#[derive(Eq, Ord, PartialEq, PartialOrd)]
#[derive(thiserror::Error)]
pub enum Error {
    /// The input is shorter than its fixed header or declared size.
    #[error("input truncated: need {needed} bytes, have {available}")]
    Truncated { needed: usize, available: usize },
    /// The ABI header does not carry the SOF magic.
    #[error("invalid magic {0:#010x}")]
    Magic(u32),
    /// Manifest record `index` extends past the end of the manifest.
    #[error("manifest record {index} overruns the manifest: need {needed} bytes, have {available}")]
    Overrun { index: usize, needed: usize, available: usize },
}

/// Decoded ABI header of a firmware blob.
#[derive(Clone, Copy, Debug, Hash)]
#[derive(Eq, PartialEq)]
pub struct AbiHeader {
    /// Component-specific blob type.
    pub kind: u32,
    /// Payload size in bytes.
    pub size: u32,
    /// Packed ABI version, see [`sys::abi_version()`].
    pub abi: u32,
}

impl AbiHeader {
    /// Decodes the header at the start of `data`.
    ///
    /// Returns the header and exactly `size` bytes of payload. Bytes beyond
    /// the payload are ignored.
    pub fn parse(data: &[u8]) -> Result<(Self, &[u8]), Error> {
        let hdr_size = size_of::<sys::AbiHdr>();
        let hdr: sys::AbiHdr = crate::read(data, 0).ok_or(Error::Truncated {
            needed: hdr_size,
            available: data.len(),
        })?;

        let magic: u32 = hdr.magic.to_native();
        if magic != sys::ABI_MAGIC {
            return Err(Error::Magic(magic));
        }

        let v = Self {
            kind: hdr.r#type.to_native(),
            size: hdr.size.to_native(),
            abi: hdr.abi.to_native(),
        };

        let needed = hdr_size.saturating_add(v.size as usize);
        let payload = data.get(hdr_size..needed).ok_or(Error::Truncated {
            needed,
            available: data.len(),
        })?;

        Ok((v, payload))
    }

    #[must_use]
    pub fn abi_major(&self) -> u32 {
        sys::abi_version_major(self.abi)
    }

    #[must_use]
    pub fn abi_minor(&self) -> u32 {
        sys::abi_version_minor(self.abi)
    }

    #[must_use]
    pub fn abi_patch(&self) -> u32 {
        sys::abi_version_patch(self.abi)
    }
}

/// Topology manifest, borrowing its region.
#[derive(Clone, Copy, Debug)]
#[derive(Eq, PartialEq)]
pub struct Manifest<'data> {
    pub abi_major: u16,
    pub abi_minor: u16,
    pub abi_patch: u16,
    /// Number of records the manifest declares. Not all of them are
    /// necessarily present, see [`Manifest::items()`].
    pub count: u16,
    data: &'data [u8],
}

impl<'data> Manifest<'data> {
    /// Decodes a manifest from its whole declared region.
    ///
    /// A region of only the version triple is a manifest without records.
    pub fn parse(data: &'data [u8]) -> Result<Self, Error> {
        if data.len() == MANIFEST_VERSION_SIZE {
            return Ok(Self {
                abi_major: u16::from_le_bytes([data[0], data[1]]),
                abi_minor: u16::from_le_bytes([data[2], data[3]]),
                abi_patch: u16::from_le_bytes([data[4], data[5]]),
                count: 0,
                data,
            });
        }

        let needed = if data.len() < MANIFEST_VERSION_SIZE {
            MANIFEST_VERSION_SIZE
        } else {
            size_of::<sys::Manifest>()
        };
        let hdr: sys::Manifest = crate::read(data, 0).ok_or(Error::Truncated {
            needed,
            available: data.len(),
        })?;

        Ok(Self {
            abi_major: hdr.abi_major.to_native(),
            abi_minor: hdr.abi_minor.to_native(),
            abi_patch: hdr.abi_patch.to_native(),
            count: hdr.count.to_native(),
            data,
        })
    }

    /// Iterates the declared records.
    ///
    /// The first record that does not fit into the region yields
    /// [`Error::Overrun`] and ends the iteration.
    #[must_use]
    pub fn items(&self) -> Items<'data> {
        Items {
            data: self.data,
            pos: size_of::<sys::Manifest>(),
            index: 0,
            count: self.count as usize,
        }
    }
}

/// Manifest record.
#[derive(Clone, Copy, Debug, Hash)]
#[derive(Eq, PartialEq)]
pub enum Item<'data> {
    /// ACPI Non-HD Audio Link Table, passed through uninterpreted.
    Nhlt(&'data [u8]),
    /// A record of a type this decoder does not know.
    Unknown { kind: u32, data: &'data [u8] },
}

/// Iterator over the records of a [`Manifest`].
#[derive(Clone, Debug)]
pub struct Items<'data> {
    data: &'data [u8],
    pos: usize,
    index: usize,
    count: usize,
}

impl<'data> Items<'data> {
    fn decode(&mut self) -> Result<Item<'data>, Error> {
        let overrun = |needed| Error::Overrun {
            index: self.index,
            needed,
            available: self.data.len(),
        };

        let hdr_end = self.pos + size_of::<sys::ManifestTlv>();
        let tlv: sys::ManifestTlv = crate::read(self.data, self.pos)
            .ok_or(overrun(hdr_end))?;

        let kind: u32 = tlv.r#type.to_native();
        let size: u32 = tlv.size.to_native();
        let end = hdr_end.checked_add(size as usize).ok_or(overrun(usize::MAX))?;
        let data = self.data.get(hdr_end..end).ok_or(overrun(end))?;

        self.pos = end;

        if kind == sys::MANIFEST_DATA_TYPE_NHLT {
            Ok(Item::Nhlt(data))
        } else {
            tracing::warn!(index = self.index, kind, size, "unknown manifest record");
            Ok(Item::Unknown { kind, data })
        }
    }
}

impl<'data> Iterator for Items<'data> {
    type Item = Result<Item<'data>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }

        let r = self.decode();
        self.index = if r.is_ok() { self.index + 1 } else { self.count };
        Some(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn blob(magic: u32, size: u32, payload: &[u8]) -> Vec<u8> {
        let mut v = Vec::new();
        v.extend_from_slice(&magic.to_le_bytes());
        v.extend_from_slice(&7u32.to_le_bytes());
        v.extend_from_slice(&size.to_le_bytes());
        v.extend_from_slice(&sys::abi_version(3, 21, 1).to_le_bytes());
        v.extend_from_slice(&[0; 16]);
        v.extend_from_slice(payload);
        v
    }

    fn manifest(count: u16, records: &[(u32, &[u8])]) -> Vec<u8> {
        let mut v = Vec::new();
        for x in [1u16, 2, 3, count] {
            v.extend_from_slice(&x.to_le_bytes());
        }
        for (kind, data) in records {
            v.extend_from_slice(&kind.to_le_bytes());
            v.extend_from_slice(&(data.len() as u32).to_le_bytes());
            v.extend_from_slice(data);
        }
        v
    }

    #[test]
    fn header() {
        let b = blob(sys::ABI_MAGIC, 4, &[1, 2, 3, 4, 5]);
        let (h, payload) = AbiHeader::parse(&b).unwrap();

        assert_eq!(h.kind, 7);
        assert_eq!(h.size, 4);
        assert_eq!((h.abi_major(), h.abi_minor(), h.abi_patch()), (3, 21, 1));
        assert_eq!(payload, &[1, 2, 3, 4]);

        let b = blob(sys::ABI_MAGIC, 0, &[]);
        assert!(AbiHeader::parse(&b).unwrap().1.is_empty());
    }

    #[test]
    fn header_malformed() {
        let b = blob(0x12345678, 0, &[]);
        assert_eq!(AbiHeader::parse(&b), Err(Error::Magic(0x12345678)));

        let b = blob(sys::ABI_MAGIC, 8, &[0; 7]);
        assert_eq!(
            AbiHeader::parse(&b),
            Err(Error::Truncated { needed: 40, available: 39 }),
        );

        let b = blob(sys::ABI_MAGIC, u32::MAX, &[]);
        assert!(matches!(AbiHeader::parse(&b), Err(Error::Truncated { .. })));

        assert_eq!(
            AbiHeader::parse(&[0; 31]),
            Err(Error::Truncated { needed: 32, available: 31 }),
        );
    }

    #[test]
    fn manifest_items() {
        let m = manifest(3, &[
            (sys::MANIFEST_DATA_TYPE_NHLT, &[0xaa; 5]),
            (0x44, &[]),
            (sys::MANIFEST_DATA_TYPE_NHLT, &[0xbb]),
        ]);
        let m = Manifest::parse(&m).unwrap();

        assert_eq!((m.abi_major, m.abi_minor, m.abi_patch, m.count), (1, 2, 3, 3));

        let v: Vec<_> = m.items().collect::<Result<_, _>>().unwrap();
        assert_eq!(v, [
            Item::Nhlt(&[0xaa; 5]),
            Item::Unknown { kind: 0x44, data: &[] },
            Item::Nhlt(&[0xbb]),
        ]);
    }

    #[test]
    fn manifest_short() {
        // Version only, no count and thus no records.
        let m = Manifest::parse(&[1, 0, 2, 0, 3, 0]).unwrap();
        assert_eq!(m.count, 0);
        assert_eq!(m.items().count(), 0);

        assert_eq!(
            Manifest::parse(&[1, 0, 2, 0, 3]),
            Err(Error::Truncated { needed: 6, available: 5 }),
        );
        assert_eq!(
            Manifest::parse(&[1, 0, 2, 0, 3, 0, 1]),
            Err(Error::Truncated { needed: 8, available: 7 }),
        );

        // Declared count larger than what is present.
        let m = manifest(2, &[(sys::MANIFEST_DATA_TYPE_NHLT, &[1, 2])]);
        let v: Vec<_> = Manifest::parse(&m).unwrap().items().collect();
        assert_eq!(v.len(), 2);
        assert_eq!(v[0], Ok(Item::Nhlt(&[1, 2])));
        assert_eq!(v[1], Err(Error::Overrun { index: 1, needed: 26, available: 18 }));
    }

    #[test]
    fn manifest_overrun() {
        // Declared size past the region.
        let mut m = manifest(2, &[(sys::MANIFEST_DATA_TYPE_NHLT, &[0; 4])]);
        m[12..16].copy_from_slice(&5u32.to_le_bytes());
        let v: Vec<_> = Manifest::parse(&m).unwrap().items().collect();
        assert_eq!(v, [Err(Error::Overrun { index: 0, needed: 21, available: 20 })]);

        // Declared size that overflows.
        m[12..16].copy_from_slice(&u32::MAX.to_le_bytes());
        let mut it = Manifest::parse(&m).unwrap().items();
        assert!(matches!(it.next(), Some(Err(Error::Overrun { index: 0, .. }))));
        assert_eq!(it.next(), None);
    }
}
