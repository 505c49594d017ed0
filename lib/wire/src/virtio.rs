//! # Virtio over PCI
//!
//! Decoders for the modern virtio-PCI transport. [`Caps`] walks the PCI
//! capability list of a configuration space image and decodes the virtio
//! capabilities on it, [`Layout`] folds them into the set of structures a
//! driver needs. [`AdminCmd`] encodes admin commands for SR-IOV member
//! devices, and [`parse_status()`] and [`notify_info()`] decode the replies.
//!
//! The capability list is a linked list in device-controlled memory. The
//! walker never trusts it: every record is bounds-checked, and every offset
//! is visited at most once, so loops and self-references end in an error
//! rather than spinning forever. Capabilities the walker does not know are
//! reported and skipped, only malformed known capabilities end the walk.

use alloc::vec::Vec;
use osi::ffi::abi::le;
use uapi::ffi::linux::native::virtio_pci as sys;

// SAFETY: Integer-only device structures without padding.
unsafe impl crate::Plain for sys::Cap {}
unsafe impl crate::Plain for sys::Cap64 {}
unsafe impl crate::Plain for sys::NotifyCap {}
unsafe impl crate::Plain for sys::VndrData {}
unsafe impl crate::Plain for sys::AdminCmdStatus {}
unsafe impl crate::Plain for sys::AdminCmdNotifyInfoData {}

// Pointers into the standard header are invalid.
const HEADER_END: usize = 0x40;

/// Errors of the virtio decoders.
#[derive(Clone, Copy, Debug, Hash)]
#[derive(Eq, Ord, PartialEq, PartialOrd)]
#[derive(thiserror::Error)]
pub enum Error {
    /// The record at `offset` does not fit into the input.
    #[error("record at {offset:#x} exceeds the input")]
    Truncated { offset: usize },
    /// A capability pointer points into the standard PCI header.
    #[error("capability pointer {offset:#x} points into the PCI header")]
    Pointer { offset: usize },
    /// The capability at `offset` declares a length too short for its type.
    #[error("capability at {offset:#x} declares invalid length {len}")]
    Length { offset: usize, len: u8 },
    /// The capability list revisits `offset`.
    #[error("capability list loops at {offset:#x}")]
    Loop { offset: usize },
}

/// Type of a virtio capability, see `CAP_*` in [`sys`].
#[derive(Clone, Copy, Debug, Hash)]
#[derive(Eq, Ord, PartialEq, PartialOrd)]
pub enum Kind {
    Common,
    Notify,
    Isr,
    Device,
    Pci,
    SharedMemory,
}

impl Kind {
    /// Maps a raw `cfg_type`, or `None` if it is unknown.
    #[must_use]
    pub const fn from_raw(v: u8) -> Option<Self> {
        match v {
            sys::CAP_COMMON_CFG => Some(Self::Common),
            sys::CAP_NOTIFY_CFG => Some(Self::Notify),
            sys::CAP_ISR_CFG => Some(Self::Isr),
            sys::CAP_DEVICE_CFG => Some(Self::Device),
            sys::CAP_PCI_CFG => Some(Self::Pci),
            sys::CAP_SHARED_MEMORY_CFG => Some(Self::SharedMemory),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_raw(self) -> u8 {
        match self {
            Self::Common => sys::CAP_COMMON_CFG,
            Self::Notify => sys::CAP_NOTIFY_CFG,
            Self::Isr => sys::CAP_ISR_CFG,
            Self::Device => sys::CAP_DEVICE_CFG,
            Self::Pci => sys::CAP_PCI_CFG,
            Self::SharedMemory => sys::CAP_SHARED_MEMORY_CFG,
        }
    }
}

/// Decoded virtio capability.
#[derive(Clone, Copy, Debug, Hash)]
#[derive(Eq, PartialEq)]
pub struct VirtioCap {
    /// Offset of the capability in configuration space.
    pub position: usize,
    pub kind: Kind,
    /// BAR holding the structure.
    pub bar: u8,
    /// Distinguishes multiple capabilities of the same kind, most notably
    /// shared memory regions.
    pub id: u8,
    /// Offset of the structure in the BAR. 64-bit only for shared memory.
    pub offset: u64,
    /// Length of the structure. 64-bit only for shared memory.
    pub length: u64,
    /// Set for [`Kind::Notify`] only.
    pub notify_off_multiplier: Option<u32>,
}

/// Entry of the PCI capability list.
#[derive(Clone, Copy, Debug, Hash)]
#[derive(Eq, PartialEq)]
pub enum Capability {
    Virtio(VirtioCap),
    /// Vendor-defined data of a virtio device. `len` covers the whole
    /// capability, including its 6-byte header.
    Vendor {
        position: usize,
        vendor_id: u16,
        len: u8,
    },
    /// A capability that is not a known virtio capability. `cfg_type` is set
    /// for vendor capabilities with an unknown type.
    Other {
        position: usize,
        id: u8,
        cfg_type: Option<u8>,
    },
}

/// Iterator over the PCI capability list of a configuration space image.
///
/// Yields one entry per capability. After the first error the iterator is
/// exhausted.
#[derive(Clone, Debug)]
pub struct Caps<'data> {
    config: &'data [u8],
    next: usize,
    // Offsets are 8-bit, so 256 bits cover all of them.
    visited: [u64; 4],
}

impl<'data> Caps<'data> {
    /// Starts a walk over `config`, the raw configuration space of a
    /// function.
    ///
    /// Fails if `config` is too short to hold the standard header. If the
    /// status register reports no capability list, the walk is empty.
    pub fn new(config: &'data [u8]) -> Result<Self, Error> {
        let head = *config
            .get(sys::PCI_CAPABILITY_LIST)
            .ok_or(Error::Truncated { offset: 0 })?;
        let status = u16::from_le_bytes([
            config[sys::PCI_STATUS],
            config[sys::PCI_STATUS + 1],
        ]);

        let next = if status & sys::PCI_STATUS_CAP_LIST == 0 {
            0
        } else {
            (head & !0x3) as usize
        };

        Ok(Self {
            config,
            next,
            visited: [0; 4],
        })
    }

    fn visit(&mut self, offset: usize) -> bool {
        let (idx, bit) = (offset / 64, 1u64 << (offset % 64));
        let seen = self.visited[idx] & bit != 0;
        self.visited[idx] |= bit;
        seen
    }

    fn decode(&mut self, offset: usize) -> Result<Capability, Error> {
        if offset < HEADER_END {
            return Err(Error::Pointer { offset });
        }
        if self.visit(offset) {
            return Err(Error::Loop { offset });
        }

        let hdr = self.config
            .get(offset..offset + 2)
            .ok_or(Error::Truncated { offset })?;
        let id = hdr[0];
        self.next = (hdr[1] & !0x3) as usize;

        if id != sys::PCI_CAP_ID_VNDR {
            tracing::debug!(offset, id, "skipping non-vendor PCI capability");
            return Ok(Capability::Other { position: offset, id, cfg_type: None });
        }

        let hdr = self.config
            .get(offset..offset + 4)
            .ok_or(Error::Truncated { offset })?;
        let (cap_len, cfg_type) = (hdr[2], hdr[3]);

        if cfg_type == sys::CAP_VENDOR_CFG {
            return self.decode_vendor(offset, cap_len);
        }

        let Some(kind) = Kind::from_raw(cfg_type) else {
            tracing::debug!(offset, cfg_type, "skipping unknown virtio capability");
            return Ok(Capability::Other {
                position: offset,
                id,
                cfg_type: Some(cfg_type),
            });
        };

        let len = self.check_len(offset, cap_len, size_of::<sys::Cap>())?;
        let cap: sys::Cap = crate::read(self.config, offset)
            .ok_or(Error::Truncated { offset })?;

        let mut v = VirtioCap {
            position: offset,
            kind,
            bar: cap.bar,
            id: cap.id,
            offset: cap.offset.to_native::<u32>().into(),
            length: cap.length.to_native::<u32>().into(),
            notify_off_multiplier: None,
        };

        match kind {
            Kind::Notify => {
                if len < size_of::<sys::NotifyCap>() {
                    return Err(Error::Length { offset, len: cap_len });
                }
                let n: sys::NotifyCap = crate::read(self.config, offset)
                    .ok_or(Error::Truncated { offset })?;
                v.notify_off_multiplier = Some(n.notify_off_multiplier.to_native());
            },
            Kind::SharedMemory => {
                if len < size_of::<sys::Cap64>() {
                    return Err(Error::Length { offset, len: cap_len });
                }
                let c: sys::Cap64 = crate::read(self.config, offset)
                    .ok_or(Error::Truncated { offset })?;
                v.offset |= u64::from(c.offset_hi.to_native::<u32>()) << 32;
                v.length |= u64::from(c.length_hi.to_native::<u32>()) << 32;
            },
            _ => {},
        }

        Ok(Capability::Virtio(v))
    }

    // Verifies `cap_len` covers `min` bytes and fits into the image.
    fn check_len(&self, offset: usize, cap_len: u8, min: usize) -> Result<usize, Error> {
        let len = cap_len as usize;
        if len < min {
            return Err(Error::Length { offset, len: cap_len });
        }
        if offset + len > self.config.len() {
            return Err(Error::Truncated { offset });
        }
        Ok(len)
    }

    fn decode_vendor(&self, offset: usize, cap_len: u8) -> Result<Capability, Error> {
        self.check_len(offset, cap_len, size_of::<sys::VndrData>())?;
        let v: sys::VndrData = crate::read(self.config, offset)
            .ok_or(Error::Truncated { offset })?;

        Ok(Capability::Vendor {
            position: offset,
            vendor_id: v.vendor_id.to_native(),
            len: cap_len,
        })
    }
}

impl Iterator for Caps<'_> {
    type Item = Result<Capability, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == 0 {
            return None;
        }

        let r = self.decode(self.next);
        if r.is_err() {
            self.next = 0;
        }
        Some(r)
    }
}

/// Virtio structures of a device, as announced by its capabilities.
///
/// For each kind the first capability wins, as the virtio specification asks
/// drivers to prefer earlier capabilities. Shared memory regions are all
/// kept, in list order.
#[derive(Clone, Debug, Default)]
#[derive(Eq, PartialEq)]
pub struct Layout {
    pub common: Option<VirtioCap>,
    pub notify: Option<VirtioCap>,
    pub isr: Option<VirtioCap>,
    pub device: Option<VirtioCap>,
    pub pci: Option<VirtioCap>,
    pub shared_memory: Vec<VirtioCap>,
}

impl Layout {
    /// Walks the capability list of `config` and collects the layout.
    pub fn scan(config: &[u8]) -> Result<Self, Error> {
        let mut layout = Self::default();

        for cap in Caps::new(config)? {
            let Capability::Virtio(v) = cap? else { continue };
            let slot = match v.kind {
                Kind::Common => &mut layout.common,
                Kind::Notify => &mut layout.notify,
                Kind::Isr => &mut layout.isr,
                Kind::Device => &mut layout.device,
                Kind::Pci => &mut layout.pci,
                Kind::SharedMemory => {
                    layout.shared_memory.push(v);
                    continue;
                },
            };
            if slot.is_none() {
                *slot = Some(v);
            }
        }

        Ok(layout)
    }

    /// Whether a modern driver can operate the device, which requires at
    /// least the common configuration and the notification area.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.common.is_some() && self.notify.is_some()
    }
}

/// Admin command addressed to a member of a device group.
#[derive(Clone, Copy, Debug, Hash)]
#[derive(Eq, PartialEq)]
pub struct AdminCmd {
    pub opcode: u16,
    pub group_type: u16,
    pub group_member_id: u64,
}

impl AdminCmd {
    #[must_use]
    pub const fn new(opcode: u16, group_type: u16, group_member_id: u64) -> Self {
        Self { opcode, group_type, group_member_id }
    }

    /// Addresses the SR-IOV virtual function `vf` (starting at 1).
    #[must_use]
    pub const fn sriov(opcode: u16, vf: u64) -> Self {
        Self::new(opcode, sys::ADMIN_GROUP_TYPE_SRIOV, vf)
    }

    /// Returns the command header.
    #[must_use]
    pub fn header(&self) -> sys::AdminCmdHdr {
        sys::AdminCmdHdr {
            opcode: le::packed::num(self.opcode),
            group_type: le::packed::num(self.group_type),
            reserved1: [0; 12],
            group_member_id: le::packed::num(self.group_member_id),
        }
    }

    // Header followed by `data`.
    fn encode(&self, data: &[u8]) -> Vec<u8> {
        let hdr = self.header();
        let mut v = Vec::with_capacity(size_of::<sys::AdminCmdHdr>() + data.len());
        v.extend_from_slice(osi::mem::as_bytes(&hdr));
        v.extend_from_slice(data);
        v
    }

    /// Encodes a legacy write of `registers` at `offset`.
    ///
    /// Use with [`sys::ADMIN_CMD_LEGACY_COMMON_CFG_WRITE`] or
    /// [`sys::ADMIN_CMD_LEGACY_DEV_CFG_WRITE`].
    #[must_use]
    pub fn legacy_write(&self, offset: u8, registers: &[u8]) -> Vec<u8> {
        let data = sys::AdminCmdLegacyWrData {
            offset,
            ..Default::default()
        };
        let mut v = self.encode(osi::mem::as_bytes(&data));
        v.extend_from_slice(registers);
        v
    }

    /// Encodes a legacy read at `offset`. The length of the read is given by
    /// the size of the result buffer of the command.
    #[must_use]
    pub fn legacy_read(&self, offset: u8) -> Vec<u8> {
        let data = sys::AdminCmdLegacyRdData { offset };
        self.encode(osi::mem::as_bytes(&data))
    }
}

/// Completion status of an admin command.
#[derive(Clone, Copy, Debug, Hash)]
#[derive(Eq, PartialEq)]
pub struct Status {
    pub status: u16,
    pub qualifier: u16,
}

impl Status {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == sys::ADMIN_STATUS_OK
    }
}

/// Decodes the status block of an admin command reply.
pub fn parse_status(data: &[u8]) -> Result<Status, Error> {
    let v: sys::AdminCmdStatus = crate::read(data, 0)
        .ok_or(Error::Truncated { offset: 0 })?;

    Ok(Status {
        status: v.status.to_native(),
        qualifier: v.status_qualifier.to_native(),
    })
}

/// Notification area reported by [`sys::ADMIN_CMD_LEGACY_NOTIFY_INFO`].
#[derive(Clone, Copy, Debug, Hash)]
#[derive(Eq, PartialEq)]
pub struct NotifyInfo {
    pub flags: u8,
    pub bar: u8,
    pub offset: u64,
}

impl NotifyInfo {
    /// Whether the area lies in a BAR of the owner device, rather than the
    /// member device.
    #[must_use]
    pub fn is_owner(&self) -> bool {
        self.flags == sys::ADMIN_CMD_NOTIFY_INFO_FLAGS_OWNER_DEV
    }
}

/// Decodes the result of a legacy notify-info command.
///
/// The result holds up to [`sys::ADMIN_CMD_MAX_NOTIFY_INFO`] entries. The
/// first entry flagged as end terminates the list early.
pub fn notify_info(data: &[u8]) -> Result<Vec<NotifyInfo>, Error> {
    if data.len() < size_of::<sys::AdminCmdNotifyInfoResult>() {
        return Err(Error::Truncated { offset: 0 });
    }

    let mut v = Vec::new();
    for i in 0..sys::ADMIN_CMD_MAX_NOTIFY_INFO {
        let offset = i * size_of::<sys::AdminCmdNotifyInfoData>();
        let e: sys::AdminCmdNotifyInfoData = crate::read(data, offset)
            .ok_or(Error::Truncated { offset })?;
        if e.flags == sys::ADMIN_CMD_NOTIFY_INFO_FLAGS_END {
            break;
        }
        v.push(NotifyInfo {
            flags: e.flags,
            bar: e.bar,
            offset: e.offset.to_native(),
        });
    }

    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Builds a virtio capability record.
    fn cap(next: u8, len: u8, cfg_type: u8, bar: u8, offset: u32, length: u32) -> [u8; 16] {
        let mut v = [0u8; 16];
        v[0] = sys::PCI_CAP_ID_VNDR;
        v[1] = next;
        v[2] = len;
        v[3] = cfg_type;
        v[4] = bar;
        v[8..12].copy_from_slice(&offset.to_le_bytes());
        v[12..16].copy_from_slice(&length.to_le_bytes());
        v
    }

    // Builds a configuration space with a capability list starting at `head`.
    fn config(head: u8, records: &[(usize, &[u8])]) -> [u8; 256] {
        let mut v = [0u8; 256];
        v[sys::PCI_STATUS] = sys::PCI_STATUS_CAP_LIST as u8;
        v[sys::PCI_CAPABILITY_LIST] = head;
        for (at, data) in records {
            v[*at..*at + data.len()].copy_from_slice(data);
        }
        v
    }

    fn modern() -> [u8; 256] {
        let mut notify = [0u8; 20];
        notify[..16].copy_from_slice(&cap(0x64, 20, sys::CAP_NOTIFY_CFG, 4, 0x3000, 0x1000));
        notify[16..].copy_from_slice(&4u32.to_le_bytes());

        let mut shm = [0u8; 24];
        shm[..16].copy_from_slice(&cap(0x00, 24, sys::CAP_SHARED_MEMORY_CFG, 2, 0x10, 0x20));
        shm[5] = 1;
        shm[16..20].copy_from_slice(&1u32.to_le_bytes());
        shm[20..24].copy_from_slice(&2u32.to_le_bytes());

        config(0x40, &[
            (0x40, &cap(0x50, 16, sys::CAP_COMMON_CFG, 4, 0x0000, 0x1000)),
            (0x50, &notify),
            (0x64, &cap(0x74, 16, sys::CAP_ISR_CFG, 4, 0x1000, 0x1000)),
            (0x74, &cap(0x84, 16, sys::CAP_DEVICE_CFG, 4, 0x2000, 0x1000)),
            // MSI-X, not a vendor capability.
            (0x84, &[0x11, 0x88, 0x00, 0x00]),
            // Vendor capability of an unknown type.
            (0x88, &cap(0x98, 16, 0x7f, 0, 0, 0)),
            (0x98, &shm),
        ])
    }

    #[test]
    fn walk() {
        let cfg = modern();
        let caps: Vec<_> = Caps::new(&cfg).unwrap().collect::<Result<_, _>>().unwrap();

        assert_eq!(caps.len(), 7);
        assert!(matches!(
            caps[0],
            Capability::Virtio(VirtioCap { kind: Kind::Common, bar: 4, offset: 0, length: 0x1000, .. }),
        ));
        assert!(matches!(
            caps[1],
            Capability::Virtio(VirtioCap { kind: Kind::Notify, notify_off_multiplier: Some(4), .. }),
        ));
        assert!(matches!(caps[2], Capability::Virtio(VirtioCap { kind: Kind::Isr, .. })));
        assert!(matches!(caps[3], Capability::Virtio(VirtioCap { kind: Kind::Device, .. })));
        assert_eq!(caps[4], Capability::Other { position: 0x84, id: 0x11, cfg_type: None });
        assert_eq!(caps[5], Capability::Other { position: 0x88, id: 0x09, cfg_type: Some(0x7f) });
        assert_eq!(
            caps[6],
            Capability::Virtio(VirtioCap {
                position: 0x98,
                kind: Kind::SharedMemory,
                bar: 2,
                id: 1,
                offset: 0x1_0000_0010,
                length: 0x2_0000_0020,
                notify_off_multiplier: None,
            }),
        );
    }

    #[test]
    fn layout() {
        let cfg = modern();
        let l = Layout::scan(&cfg).unwrap();

        assert!(l.is_usable());
        assert_eq!(l.common.map(|v| v.position), Some(0x40));
        assert_eq!(l.notify.and_then(|v| v.notify_off_multiplier), Some(4));
        assert_eq!(l.isr.map(|v| v.offset), Some(0x1000));
        assert_eq!(l.device.map(|v| v.offset), Some(0x2000));
        assert_eq!(l.pci, None);
        assert_eq!(l.shared_memory.len(), 1);

        // Only legacy capabilities, no modern interface.
        let cfg = config(0x40, &[(0x40, &[0x11, 0x00, 0x00, 0x00])]);
        let l = Layout::scan(&cfg).unwrap();
        assert!(!l.is_usable());
        assert_eq!(l, Layout::default());
    }

    #[test]
    fn first_wins() {
        let cfg = config(0x40, &[
            (0x40, &cap(0x50, 16, sys::CAP_COMMON_CFG, 1, 0x100, 0x38)),
            (0x50, &cap(0x00, 16, sys::CAP_COMMON_CFG, 2, 0x200, 0x38)),
        ]);
        let l = Layout::scan(&cfg).unwrap();

        assert_eq!(l.common.map(|v| v.bar), Some(1));
    }

    #[test]
    fn no_list() {
        let mut cfg = modern();
        cfg[sys::PCI_STATUS] = 0;

        assert_eq!(Caps::new(&cfg).unwrap().count(), 0);
        assert_eq!(Caps::new(&cfg[..0x20]).unwrap_err(), Error::Truncated { offset: 0 });
    }

    #[test]
    fn loops() {
        // Two records pointing at each other.
        let cfg = config(0x40, &[
            (0x40, &cap(0x50, 16, sys::CAP_ISR_CFG, 0, 0, 0)),
            (0x50, &cap(0x40, 16, sys::CAP_ISR_CFG, 0, 0, 0)),
        ]);
        let r: Vec<_> = Caps::new(&cfg).unwrap().collect();
        assert_eq!(r.len(), 3);
        assert!(r[0].is_ok());
        assert!(r[1].is_ok());
        assert_eq!(r[2], Err(Error::Loop { offset: 0x40 }));

        // A record pointing at itself.
        let cfg = config(0x40, &[(0x40, &[0x11, 0x40, 0x00, 0x00])]);
        let r: Vec<_> = Caps::new(&cfg).unwrap().collect();
        assert_eq!(r.len(), 2);
        assert_eq!(r[1], Err(Error::Loop { offset: 0x40 }));
    }

    #[test]
    fn unknown_short() {
        // Unknown types are skipped whatever length they declare.
        let cfg = config(0x40, &[
            (0x40, &[sys::PCI_CAP_ID_VNDR, 0x50, 8, 0x7f, 0, 0, 0, 0]),
            (0x50, &cap(0x00, 16, sys::CAP_COMMON_CFG, 3, 0x100, 0x38)),
        ]);
        let caps: Vec<_> = Caps::new(&cfg).unwrap().collect::<Result<_, _>>().unwrap();

        assert_eq!(caps.len(), 2);
        assert_eq!(caps[0], Capability::Other { position: 0x40, id: 0x09, cfg_type: Some(0x7f) });
        assert!(matches!(
            caps[1],
            Capability::Virtio(VirtioCap { position: 0x50, kind: Kind::Common, bar: 3, .. }),
        ));
        assert_eq!(Layout::scan(&cfg).unwrap().common.map(|v| v.offset), Some(0x100));
    }

    #[test]
    fn vendor_data() {
        let cfg = config(0x40, &[
            (0x40, &[sys::PCI_CAP_ID_VNDR, 0x50, 8, sys::CAP_VENDOR_CFG, 0xf4, 0x1a, 0xaa, 0xbb]),
            (0x50, &cap(0x00, 16, sys::CAP_COMMON_CFG, 3, 0x100, 0x38)),
        ]);
        let caps: Vec<_> = Caps::new(&cfg).unwrap().collect::<Result<_, _>>().unwrap();

        assert_eq!(caps[0], Capability::Vendor { position: 0x40, vendor_id: 0x1af4, len: 8 });
        assert!(matches!(caps[1], Capability::Virtio(VirtioCap { kind: Kind::Common, .. })));

        let l = Layout::scan(&cfg).unwrap();
        assert_eq!(l.common.map(|v| v.bar), Some(3));
        assert_eq!(l.shared_memory.len(), 0);

        // Too short for the vendor ID.
        let cfg = config(0x40, &[(0x40, &[sys::PCI_CAP_ID_VNDR, 0x00, 4, sys::CAP_VENDOR_CFG])]);
        let r: Vec<_> = Caps::new(&cfg).unwrap().collect();
        assert_eq!(r, [Err(Error::Length { offset: 0x40, len: 4 })]);

        // Declared length past the image.
        let cfg = config(0x40, &[(0x40, &[sys::PCI_CAP_ID_VNDR, 0x00, 16, sys::CAP_VENDOR_CFG])]);
        let r: Vec<_> = Caps::new(&cfg[..0x48]).unwrap().collect();
        assert_eq!(r, [Err(Error::Truncated { offset: 0x40 })]);
    }

    #[test]
    fn malformed() {
        // Pointer into the standard header.
        let cfg = config(0x10, &[]);
        let r: Vec<_> = Caps::new(&cfg).unwrap().collect();
        assert_eq!(r, [Err(Error::Pointer { offset: 0x10 })]);

        // Declared length shorter than the generic capability.
        let cfg = config(0x40, &[(0x40, &cap(0, 8, sys::CAP_COMMON_CFG, 0, 0, 0))]);
        let r: Vec<_> = Caps::new(&cfg).unwrap().collect();
        assert_eq!(r, [Err(Error::Length { offset: 0x40, len: 8 })]);

        // Notify capability without room for the multiplier.
        let cfg = config(0x40, &[(0x40, &cap(0, 16, sys::CAP_NOTIFY_CFG, 0, 0, 0))]);
        let r: Vec<_> = Caps::new(&cfg).unwrap().collect();
        assert_eq!(r, [Err(Error::Length { offset: 0x40, len: 16 })]);

        // Record running past the end of the image.
        let cfg = config(0x40, &[(0x40, &cap(0, 16, sys::CAP_COMMON_CFG, 0, 0, 0))]);
        let r: Vec<_> = Caps::new(&cfg[..0x48]).unwrap().collect();
        assert_eq!(r, [Err(Error::Truncated { offset: 0x40 })]);

        let cfg = config(0x40, &[(0x40, &cap(0, 64, sys::CAP_COMMON_CFG, 0, 0, 0))]);
        let r: Vec<_> = Caps::new(&cfg[..0x60]).unwrap().collect();
        assert_eq!(r, [Err(Error::Truncated { offset: 0x40 })]);

        // Errors end the walk and propagate from the layout scan.
        let cfg = config(0x40, &[(0x40, &cap(0x10, 16, sys::CAP_COMMON_CFG, 0, 0, 0))]);
        assert_eq!(Layout::scan(&cfg), Err(Error::Pointer { offset: 0x10 }));
    }

    #[test]
    fn admin_encode() {
        let cmd = AdminCmd::sriov(sys::ADMIN_CMD_LEGACY_COMMON_CFG_WRITE, 3);

        assert_eq!(cmd.group_type, sys::ADMIN_GROUP_TYPE_SRIOV);
        assert_eq!(
            osi::mem::as_bytes(&cmd.header()),
            &[2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0],
        );

        let w = cmd.legacy_write(0x12, &[0xaa, 0xbb]);
        assert_eq!(w.len(), 24 + 8 + 2);
        assert_eq!(&w[24..], &[0x12, 0, 0, 0, 0, 0, 0, 0, 0xaa, 0xbb]);

        let r = AdminCmd::sriov(sys::ADMIN_CMD_LEGACY_DEV_CFG_READ, 1).legacy_read(0x04);
        assert_eq!(r.len(), 25);
        assert_eq!(r[0], 5);
        assert_eq!(r[24], 0x04);
    }

    #[test]
    fn admin_decode() {
        let s = parse_status(&[0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        assert!(s.is_ok());

        let s = parse_status(&[0x02, 0x01, 0x03, 0x00, 0, 0, 0, 0]).unwrap();
        assert_eq!(s, Status { status: 0x0102, qualifier: 3 });
        assert!(!s.is_ok());
        assert_eq!(parse_status(&[0; 7]), Err(Error::Truncated { offset: 0 }));

        let mut data = [0u8; 64];
        data[0] = sys::ADMIN_CMD_NOTIFY_INFO_FLAGS_OWNER_DEV;
        data[1] = 2;
        data[8] = 0x40;
        data[16] = sys::ADMIN_CMD_NOTIFY_INFO_FLAGS_OWNER_MEM;
        data[17] = 4;
        data[24..32].copy_from_slice(&0x1_0000_0000u64.to_le_bytes());
        // Entry 2 ends the list, so entry 3 is ignored.
        data[48] = 0x1;

        let v = notify_info(&data).unwrap();
        assert_eq!(v.len(), 2);
        assert_eq!(v[0], NotifyInfo { flags: 1, bar: 2, offset: 0x40 });
        assert!(v[0].is_owner());
        assert_eq!(v[1].offset, 0x1_0000_0000);
        assert!(!v[1].is_owner());

        // All four slots in use.
        let mut data = [0u8; 64];
        for i in 0..4 {
            data[i * 16] = sys::ADMIN_CMD_NOTIFY_INFO_FLAGS_OWNER_MEM;
        }
        assert_eq!(notify_info(&data).unwrap().len(), 4);
        assert_eq!(notify_info(&data[..63]), Err(Error::Truncated { offset: 0 }));
    }
}
