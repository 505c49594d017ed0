//! # Virtio over PCI
//!
//! Virtio devices attached via PCI expose their configuration either through
//! the legacy I/O register block, or through a chain of vendor-specific PCI
//! capabilities (the "modern" interface). Each capability points to a window
//! inside one of the BARs of the device. Additionally, SR-IOV owner devices
//! accept admin commands on behalf of their member devices.
//!
//! All structures are defined by the virtio specification as little-endian
//! with natural alignment, regardless of the platform. They use
//! [`osi::ffi::abi::le`] rather than the platform ABI. Structures the
//! specification marks as packed use [`osi::ffi::abi::le::packed`].

use osi::ffi::abi::le;

// Legacy I/O register block.
pub const HOST_FEATURES: usize = 0;
pub const GUEST_FEATURES: usize = 4;
pub const QUEUE_PFN: usize = 8;
pub const QUEUE_NUM: usize = 12;
pub const QUEUE_SEL: usize = 14;
pub const QUEUE_NOTIFY: usize = 16;
pub const STATUS: usize = 18;
pub const ISR: usize = 19;
pub const MSI_CONFIG_VECTOR: usize = 20;
pub const MSI_QUEUE_VECTOR: usize = 22;

/// Returns the offset of the device-specific configuration in the legacy
/// register block. The two MSI-X vector registers are only present if MSI-X
/// is enabled.
#[must_use]
pub const fn config_off(msix_enabled: bool) -> usize {
    if msix_enabled { 24 } else { 20 }
}

pub const ABI_VERSION: u32 = 0;
pub const QUEUE_ADDR_SHIFT: u32 = 12;
pub const VRING_ALIGN: usize = 4096;

// ISR bit signalling a configuration change.
pub const ISR_CONFIG: u8 = 0x2;
pub const MSI_NO_VECTOR: u16 = 0xffff;

// Generic PCI configuration space.
pub const PCI_STATUS: usize = 0x06;
pub const PCI_STATUS_CAP_LIST: u16 = 0x10;
pub const PCI_CAPABILITY_LIST: usize = 0x34;
pub const PCI_CAP_ID_VNDR: u8 = 0x09;

// Values of `Cap::cfg_type`.
pub const CAP_COMMON_CFG: u8 = 1;
pub const CAP_NOTIFY_CFG: u8 = 2;
pub const CAP_ISR_CFG: u8 = 3;
pub const CAP_DEVICE_CFG: u8 = 4;
pub const CAP_PCI_CFG: u8 = 5;
pub const CAP_SHARED_MEMORY_CFG: u8 = 8;
pub const CAP_VENDOR_CFG: u8 = 9;

/// Vendor-specific PCI capability describing a virtio structure.
///
/// `cap_vndr` is always [`PCI_CAP_ID_VNDR`] and `cap_next` links to the next
/// capability in configuration space, or is 0 at the end of the list.
/// `cap_len` covers this structure plus any type-specific trailer.
#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct Cap {
    pub cap_vndr: u8,
    pub cap_next: u8,
    pub cap_len: u8,
    pub cfg_type: u8,
    pub bar: u8,
    pub id: u8,
    pub padding: [u8; 2],
    pub offset: le::U32,
    pub length: le::U32,
}

/// Capability with 64-bit offset and length, used for shared memory
/// regions.
#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct Cap64 {
    pub cap: Cap,
    pub offset_hi: le::U32,
    pub length_hi: le::U32,
}

#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct NotifyCap {
    pub cap: Cap,
    pub notify_off_multiplier: le::U32,
}

/// Common configuration structure, located by [`CAP_COMMON_CFG`].
#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct CommonCfg {
    // About the whole device.
    pub device_feature_select: le::U32,
    pub device_feature: le::U32,
    pub guest_feature_select: le::U32,
    pub guest_feature: le::U32,
    pub msix_config: le::U16,
    pub num_queues: le::U16,
    pub device_status: u8,
    pub config_generation: u8,

    // About the queue selected by `queue_select`.
    pub queue_select: le::U16,
    pub queue_size: le::U16,
    pub queue_msix_vector: le::U16,
    pub queue_enable: le::U16,
    pub queue_notify_off: le::U16,
    pub queue_desc_lo: le::U32,
    pub queue_desc_hi: le::U32,
    pub queue_avail_lo: le::U32,
    pub queue_avail_hi: le::U32,
    pub queue_used_lo: le::U32,
    pub queue_used_hi: le::U32,
}

#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct ModernCommonCfg {
    pub cfg: CommonCfg,
    pub queue_notify_data: le::U16,
    pub queue_reset: le::U16,
    pub admin_queue_index: le::U16,
    pub admin_queue_num: le::U16,
}

/// Window into BAR memory through PCI configuration space.
#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct CfgCap {
    pub cap: Cap,
    pub pci_cfg_data: [u8; 4],
}

/// Vendor-defined data, located by [`CAP_VENDOR_CFG`]. Followed by
/// `cap_len` minus 6 bytes of data whose meaning depends on `vendor_id`.
#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct VndrData {
    pub cap_vndr: u8,
    pub cap_next: u8,
    pub cap_len: u8,
    pub cfg_type: u8,
    pub vendor_id: le::U16,
}

// Field offsets of `Cap` and `NotifyCap`.
pub const CAP_VNDR: usize = 0;
pub const CAP_NEXT: usize = 1;
pub const CAP_LEN: usize = 2;
pub const CAP_CFG_TYPE: usize = 3;
pub const CAP_BAR: usize = 4;
pub const CAP_OFFSET: usize = 8;
pub const CAP_LENGTH: usize = 12;
pub const NOTIFY_CAP_MULT: usize = 16;

// Field offsets of `ModernCommonCfg`.
pub const COMMON_DFSELECT: usize = 0;
pub const COMMON_DF: usize = 4;
pub const COMMON_GFSELECT: usize = 8;
pub const COMMON_GF: usize = 12;
pub const COMMON_MSIX: usize = 16;
pub const COMMON_NUMQ: usize = 18;
pub const COMMON_STATUS: usize = 20;
pub const COMMON_CFGGENERATION: usize = 21;
pub const COMMON_Q_SELECT: usize = 22;
pub const COMMON_Q_SIZE: usize = 24;
pub const COMMON_Q_MSIX: usize = 26;
pub const COMMON_Q_ENABLE: usize = 28;
pub const COMMON_Q_NOFF: usize = 30;
pub const COMMON_Q_DESCLO: usize = 32;
pub const COMMON_Q_DESCHI: usize = 36;
pub const COMMON_Q_AVAILLO: usize = 40;
pub const COMMON_Q_AVAILHI: usize = 44;
pub const COMMON_Q_USEDLO: usize = 48;
pub const COMMON_Q_USEDHI: usize = 52;
pub const COMMON_Q_NDATA: usize = 56;
pub const COMMON_Q_RESET: usize = 58;
pub const COMMON_ADM_Q_IDX: usize = 60;
pub const COMMON_ADM_Q_NUM: usize = 62;

// Admin command status and opcodes.
pub const ADMIN_STATUS_OK: u16 = 0;
pub const ADMIN_CMD_LIST_QUERY: u16 = 0x0;
pub const ADMIN_CMD_LIST_USE: u16 = 0x1;
pub const ADMIN_GROUP_TYPE_SRIOV: u16 = 0x1;
pub const ADMIN_CMD_LEGACY_COMMON_CFG_WRITE: u16 = 0x2;
pub const ADMIN_CMD_LEGACY_COMMON_CFG_READ: u16 = 0x3;
pub const ADMIN_CMD_LEGACY_DEV_CFG_WRITE: u16 = 0x4;
pub const ADMIN_CMD_LEGACY_DEV_CFG_READ: u16 = 0x5;
pub const ADMIN_CMD_LEGACY_NOTIFY_INFO: u16 = 0x6;

/// Header of every admin command, addressing a member of a device group.
#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct AdminCmdHdr {
    pub opcode: le::packed::U16,
    pub group_type: le::packed::U16,
    pub reserved1: [u8; 12],
    pub group_member_id: le::packed::U64,
}

#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct AdminCmdStatus {
    pub status: le::packed::U16,
    pub status_qualifier: le::packed::U16,
    pub reserved2: [u8; 4],
}

/// Payload of the legacy write commands, followed by the register bytes.
#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct AdminCmdLegacyWrData {
    pub offset: u8,
    pub reserved: [u8; 7],
    pub registers: [u8; 0],
}

#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct AdminCmdLegacyRdData {
    pub offset: u8,
}

// Values of `AdminCmdNotifyInfoData::flags`.
pub const ADMIN_CMD_NOTIFY_INFO_FLAGS_END: u8 = 0;
pub const ADMIN_CMD_NOTIFY_INFO_FLAGS_OWNER_DEV: u8 = 0x1;
pub const ADMIN_CMD_NOTIFY_INFO_FLAGS_OWNER_MEM: u8 = 0x2;

pub const ADMIN_CMD_MAX_NOTIFY_INFO: usize = 4;

#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct AdminCmdNotifyInfoData {
    pub flags: u8,
    pub bar: u8,
    pub padding: [u8; 6],
    pub offset: le::packed::U64,
}

/// Reply of [`ADMIN_CMD_LEGACY_NOTIFY_INFO`]. Entries after the first one
/// flagged [`ADMIN_CMD_NOTIFY_INFO_FLAGS_END`] are unused.
#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct AdminCmdNotifyInfoResult {
    pub entries: [AdminCmdNotifyInfoData; ADMIN_CMD_MAX_NOTIFY_INFO],
}
