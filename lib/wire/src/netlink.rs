//! # RDMA Netlink Attributes
//!
//! Decoders for the payload of RDMA netlink messages. A payload is a stream
//! of attributes, each a 4-byte header (length and type) followed by the
//! attribute data and padding up to 4 bytes. Nested attributes carry another
//! attribute stream as data.
//!
//! Headers are in host order, as with all netlink traffic. Attribute data is
//! in host order as well, unless the attribute is flagged with
//! `NLA_F_NET_BYTEORDER`.

use uapi::ffi::linux::native::rdma_netlink as sys;

// SAFETY: Two host-order integers, no padding.
unsafe impl crate::Plain for sys::Nlattr {}

/// Errors of the netlink decoders.
#[derive(Clone, Copy, Debug, Hash)]
#[derive(Eq, Ord, PartialEq, PartialOrd)]
#[derive(thiserror::Error)]
pub enum Error {
    /// The attribute at `offset` does not fit into the stream.
    #[error("attribute at {offset} exceeds the stream")]
    Truncated { offset: usize },
    /// The attribute at `offset` declares a length shorter than its header.
    #[error("attribute at {offset} declares invalid length {len}")]
    Length { offset: usize, len: u16 },
    /// The attribute data does not have the size of the requested type.
    #[error("attribute payload has {actual} bytes, expected {expected}")]
    Payload { expected: usize, actual: usize },
    /// A string attribute is not valid UTF-8.
    #[error("attribute string is not valid UTF-8")]
    Utf8,
}

const fn align(v: usize) -> usize {
    (v + sys::NLA_ALIGNTO - 1) & !(sys::NLA_ALIGNTO - 1)
}

/// Netlink attribute, borrowing its data.
#[derive(Clone, Copy, Debug, Hash)]
#[derive(Eq, PartialEq)]
pub struct Attr<'data> {
    /// Attribute type with all flags masked off.
    pub kind: u16,
    pub nested: bool,
    pub net_byteorder: bool,
    pub mandatory: bool,
    pub payload: &'data [u8],
}

macro_rules! read_int {
    ($($name:ident: $ty:ty,)*) => {
        $(
            /// Reads the payload as integer of exactly the same size, in
            /// network order if the attribute says so.
            pub fn $name(&self) -> Result<$ty, Error> {
                let v: [u8; size_of::<$ty>()] = self.payload
                    .try_into()
                    .map_err(|_| Error::Payload {
                        expected: size_of::<$ty>(),
                        actual: self.payload.len(),
                    })?;

                Ok(if self.net_byteorder {
                    <$ty>::from_be_bytes(v)
                } else {
                    <$ty>::from_ne_bytes(v)
                })
            }
        )*
    };
}

impl<'data> Attr<'data> {
    fn from_raw(raw: u16, payload: &'data [u8]) -> Self {
        Self {
            kind: raw & sys::NLA_TYPE_MASK,
            nested: raw & sys::NLA_F_NESTED != 0,
            net_byteorder: raw & sys::NLA_F_NET_BYTEORDER != 0,
            mandatory: raw & sys::NLA_F_MANDATORY != 0,
            payload,
        }
    }

    read_int! {
        u8: u8,
        u16: u16,
        u32: u32,
        u64: u64,
    }

    /// Reads the payload as string, up to the first NUL byte if any.
    pub fn str(&self) -> Result<&'data str, Error> {
        let end = self.payload
            .iter()
            .position(|v| *v == 0)
            .unwrap_or(self.payload.len());

        core::str::from_utf8(&self.payload[..end]).map_err(|_| Error::Utf8)
    }

    /// Iterates the payload as attribute stream.
    ///
    /// This does not require [`Attr::nested`] to be set, since not all
    /// senders set it.
    #[must_use]
    pub fn nested(&self) -> Attrs<'data> {
        Attrs::new(self.payload)
    }
}

/// Iterator over an attribute stream.
///
/// After the first error the iterator is exhausted.
#[derive(Clone, Debug)]
pub struct Attrs<'data> {
    data: &'data [u8],
    pos: usize,
}

impl<'data> Attrs<'data> {
    #[must_use]
    pub fn new(data: &'data [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn decode(&mut self) -> Result<Attr<'data>, Error> {
        let offset = self.pos;
        let hdr: sys::Nlattr = crate::read(self.data, offset)
            .ok_or(Error::Truncated { offset })?;

        let len = hdr.nla_len as usize;
        if len < sys::NLA_HDRLEN {
            return Err(Error::Length { offset, len: hdr.nla_len });
        }
        let payload = self.data
            .get(offset + sys::NLA_HDRLEN..offset + len)
            .ok_or(Error::Truncated { offset })?;

        // The last attribute may lack its trailing padding.
        self.pos = self.data.len().min(offset + align(len));

        Ok(Attr::from_raw(hdr.nla_type, payload))
    }

    /// Returns the first attribute of type `kind`.
    ///
    /// Errors in front of the attribute are returned as well.
    pub fn lookup(mut self, kind: u16) -> Option<Result<Attr<'data>, Error>> {
        self.find(|v| v.as_ref().map_or(true, |v| v.kind == kind))
    }
}

impl<'data> Iterator for Attrs<'data> {
    type Item = Result<Attr<'data>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.data.len() {
            return None;
        }

        let r = self.decode();
        if r.is_err() {
            self.pos = self.data.len();
        }
        Some(r)
    }
}

/// Type of an RDMA netlink message.
#[derive(Clone, Copy, Debug, Hash)]
#[derive(Eq, Ord, PartialEq, PartialOrd)]
pub struct MsgType {
    pub client: u16,
    pub op: u16,
}

impl MsgType {
    #[must_use]
    pub const fn new(client: u16, op: u16) -> Self {
        Self { client, op }
    }

    /// Splits the `nlmsg_type` of a message.
    #[must_use]
    pub const fn from_raw(v: u16) -> Self {
        Self::new(sys::get_client(v), sys::get_op(v))
    }

    /// Combines client and operation into a `nlmsg_type`.
    #[must_use]
    pub const fn to_raw(self) -> u16 {
        sys::get_type(self.client, self.op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn attr(v: &mut Vec<u8>, kind: u16, payload: &[u8]) {
        v.extend_from_slice(&((sys::NLA_HDRLEN + payload.len()) as u16).to_ne_bytes());
        v.extend_from_slice(&kind.to_ne_bytes());
        v.extend_from_slice(payload);
        v.resize(align(v.len()), 0);
    }

    #[test]
    fn stream() {
        let mut entry = Vec::new();
        attr(&mut entry, sys::NLDEV_ATTR_RES_SUMMARY_ENTRY_NAME as u16, b"qp\0");
        attr(&mut entry, sys::NLDEV_ATTR_RES_SUMMARY_ENTRY_CURR as u16, &7u64.to_ne_bytes());

        let mut v = Vec::new();
        attr(&mut v, sys::NLDEV_ATTR_DEV_INDEX as u16, &3u32.to_ne_bytes());
        attr(&mut v, sys::NLDEV_ATTR_DEV_NAME as u16, b"mlx5_0\0");
        attr(&mut v, sys::NLDEV_ATTR_PORT_INDEX as u16 | sys::NLA_F_NET_BYTEORDER, &[0, 0, 0, 1]);
        attr(&mut v, sys::NLDEV_ATTR_RES_SUMMARY_ENTRY as u16 | sys::NLA_F_NESTED, &entry);

        let a: Vec<_> = Attrs::new(&v).collect::<Result<_, _>>().unwrap();
        assert_eq!(a.len(), 4);

        assert_eq!(a[0].kind, sys::NLDEV_ATTR_DEV_INDEX as u16);
        assert_eq!(a[0].u32(), Ok(3));
        assert_eq!(a[0].u64(), Err(Error::Payload { expected: 8, actual: 4 }));

        assert_eq!(a[1].str(), Ok("mlx5_0"));
        assert_eq!(a[1].payload.len(), 7);

        assert_eq!(a[2].kind, sys::NLDEV_ATTR_PORT_INDEX as u16);
        assert!(a[2].net_byteorder);
        assert_eq!(a[2].u32(), Ok(1));

        assert!(a[3].nested);
        assert!(!a[3].mandatory);
        let n: Vec<_> = a[3].nested().collect::<Result<_, _>>().unwrap();
        assert_eq!(n[0].str(), Ok("qp"));
        assert_eq!(n[1].u64(), Ok(7));

        let name = Attrs::new(&v).lookup(sys::NLDEV_ATTR_DEV_NAME as u16);
        assert_eq!(name.map(|v| v.and_then(|v| v.str())), Some(Ok("mlx5_0")));
        assert_eq!(Attrs::new(&v).lookup(0x7f), None);
    }

    #[test]
    fn unpadded_tail() {
        let mut v = Vec::new();
        attr(&mut v, 1, &[1, 2, 3, 4]);
        v.extend_from_slice(&5u16.to_ne_bytes());
        v.extend_from_slice(&(2u16 | sys::NLA_F_MANDATORY).to_ne_bytes());
        v.push(9);

        let a: Vec<_> = Attrs::new(&v).collect::<Result<_, _>>().unwrap();
        assert_eq!(a.len(), 2);
        assert_eq!(a[1].kind, 2);
        assert!(a[1].mandatory);
        assert_eq!(a[1].u8(), Ok(9));
    }

    #[test]
    fn malformed() {
        // Header cut short.
        let r: Vec<_> = Attrs::new(&[8, 0]).collect();
        assert_eq!(r, [Err(Error::Truncated { offset: 0 })]);

        // Length below the header size.
        let mut v = Vec::new();
        v.extend_from_slice(&2u16.to_ne_bytes());
        v.extend_from_slice(&1u16.to_ne_bytes());
        let r: Vec<_> = Attrs::new(&v).collect();
        assert_eq!(r, [Err(Error::Length { offset: 0, len: 2 })]);

        // Length past the stream, after a valid attribute.
        let mut v = Vec::new();
        attr(&mut v, 1, &[0; 4]);
        v.extend_from_slice(&16u16.to_ne_bytes());
        v.extend_from_slice(&2u16.to_ne_bytes());
        v.extend_from_slice(&[0; 4]);
        let r: Vec<_> = Attrs::new(&v).collect();
        assert_eq!(r.len(), 2);
        assert!(r[0].is_ok());
        assert_eq!(r[1], Err(Error::Truncated { offset: 8 }));

        let bad = Attr::from_raw(1, &[0xff, 0xfe]);
        assert_eq!(bad.str(), Err(Error::Utf8));
    }

    #[test]
    fn msg_type() {
        let t = MsgType::new(sys::NL_NLDEV as u16, sys::NLDEV_CMD_GET as u16);

        assert_eq!(t.to_raw(), 0x1401);
        assert_eq!(MsgType::from_raw(0x1401), t);
        assert_eq!(MsgType::from_raw(0x0c05), MsgType { client: 3, op: 5 });
    }
}
