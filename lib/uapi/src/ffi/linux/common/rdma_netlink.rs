//! # RDMA Netlink
//!
//! The RDMA subsystem multiplexes several clients over the `NETLINK_RDMA`
//! protocol. The netlink message type carries both the client (upper 6 bits)
//! and the client-specific operation (lower 10 bits), see [`get_type()`].
//! Message payloads are streams of netlink attributes ([`Nlattr`]), whose
//! types are listed below per client and operation.
//!
//! All enumerations are append-only. Values are never renumbered, so they can
//! be relied upon across kernel versions.

use super::abi;

// Generic netlink attribute framing.
pub const NLA_F_NESTED: abi::U16 = abi::num(1u16 << 15);
pub const NLA_F_NET_BYTEORDER: abi::U16 = abi::num(1u16 << 14);
pub const NLA_ALIGNTO: usize = 4;
pub const NLA_HDRLEN: usize = 4;

/// Header of a netlink attribute, followed by `nla_len - NLA_HDRLEN` bytes
/// of payload and padding up to [`NLA_ALIGNTO`].
#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct Nlattr {
    pub nla_len: abi::U16,
    pub nla_type: abi::U16,
}

// Netlink clients.
pub const NL_IWCM: abi::U32 = abi::num(2);
pub const NL_RSVD: abi::U32 = abi::num(3);
pub const NL_LS: abi::U32 = abi::num(4);
pub const NL_NLDEV: abi::U32 = abi::num(5);
pub const NL_NUM_CLIENTS: abi::U32 = abi::num(6);

// Multicast groups.
pub const NL_GROUP_IWPM: abi::U32 = abi::num(2);
pub const NL_GROUP_LS: abi::U32 = abi::num(3);
pub const NL_NUM_GROUPS: abi::U32 = abi::num(4);

const CLIENT_SHIFT: u16 = 10;
const OP_MASK: u16 = (1 << CLIENT_SHIFT) - 1;
const CLIENT_MASK: u16 = ((1 << 6) - 1) << CLIENT_SHIFT;

/// Extracts the client from the netlink message type `t`.
#[must_use]
pub const fn get_client(t: u16) -> u16 {
    (t & CLIENT_MASK) >> CLIENT_SHIFT
}

/// Extracts the client-specific operation from the netlink message type `t`.
#[must_use]
pub const fn get_op(t: u16) -> u16 {
    t & OP_MASK
}

/// Combines `client` and `op` into a netlink message type.
///
/// Arguments are not masked. Operations beyond 10 bits bleed into the
/// client field.
#[must_use]
pub const fn get_type(client: u16, op: u16) -> u16 {
    (client << CLIENT_SHIFT).wrapping_add(op)
}

pub const IWPM_UABI_VERSION_MIN: abi::U32 = abi::num(3);
pub const IWPM_UABI_VERSION: abi::U32 = abi::num(4);

// Flags of the iWarp port mapper.
pub const IWPM_FLAGS_NO_PORT_MAP: abi::U32 = abi::num(1);

// Operations of the iWarp port mapper client.
pub const NL_IWPM_REG_PID: abi::U32 = abi::num(0);
pub const NL_IWPM_ADD_MAPPING: abi::U32 = abi::num(1);
pub const NL_IWPM_QUERY_MAPPING: abi::U32 = abi::num(2);
pub const NL_IWPM_REMOVE_MAPPING: abi::U32 = abi::num(3);
pub const NL_IWPM_REMOTE_INFO: abi::U32 = abi::num(4);
pub const NL_IWPM_HANDLE_ERR: abi::U32 = abi::num(5);
pub const NL_IWPM_MAPINFO: abi::U32 = abi::num(6);
pub const NL_IWPM_MAPINFO_NUM: abi::U32 = abi::num(7);
pub const NL_IWPM_HELLO: abi::U32 = abi::num(8);
pub const NL_IWPM_NUM_OPS: abi::U32 = abi::num(9);

// Attributes of `NL_IWPM_REG_PID` requests.
pub const IWPM_NLA_REG_PID_UNSPEC: abi::U32 = abi::num(0);
pub const IWPM_NLA_REG_PID_SEQ: abi::U32 = abi::num(1);
pub const IWPM_NLA_REG_IF_NAME: abi::U32 = abi::num(2);
pub const IWPM_NLA_REG_IBDEV_NAME: abi::U32 = abi::num(3);
pub const IWPM_NLA_REG_ULIB_NAME: abi::U32 = abi::num(4);
pub const IWPM_NLA_REG_PID_MAX: abi::U32 = abi::num(5);

// Attributes of `NL_IWPM_REG_PID` replies.
pub const IWPM_NLA_RREG_PID_UNSPEC: abi::U32 = abi::num(0);
pub const IWPM_NLA_RREG_PID_SEQ: abi::U32 = abi::num(1);
pub const IWPM_NLA_RREG_IBDEV_NAME: abi::U32 = abi::num(2);
pub const IWPM_NLA_RREG_ULIB_NAME: abi::U32 = abi::num(3);
pub const IWPM_NLA_RREG_ULIB_VER: abi::U32 = abi::num(4);
pub const IWPM_NLA_RREG_PID_ERR: abi::U32 = abi::num(5);
pub const IWPM_NLA_RREG_PID_MAX: abi::U32 = abi::num(6);

// Attributes of `NL_IWPM_ADD_MAPPING` requests.
pub const IWPM_NLA_MANAGE_MAPPING_UNSPEC: abi::U32 = abi::num(0);
pub const IWPM_NLA_MANAGE_MAPPING_SEQ: abi::U32 = abi::num(1);
pub const IWPM_NLA_MANAGE_ADDR: abi::U32 = abi::num(2);
pub const IWPM_NLA_MANAGE_FLAGS: abi::U32 = abi::num(3);
pub const IWPM_NLA_MANAGE_MAPPING_MAX: abi::U32 = abi::num(4);

// Attributes of `NL_IWPM_ADD_MAPPING` replies.
pub const IWPM_NLA_RMANAGE_MAPPING_UNSPEC: abi::U32 = abi::num(0);
pub const IWPM_NLA_RMANAGE_MAPPING_SEQ: abi::U32 = abi::num(1);
pub const IWPM_NLA_RMANAGE_ADDR: abi::U32 = abi::num(2);
pub const IWPM_NLA_RMANAGE_MAPPED_LOC_ADDR: abi::U32 = abi::num(3);
pub const IWPM_NLA_MANAGE_MAPPED_LOC_ADDR: abi::U32 = abi::num(3);
pub const IWPM_NLA_RMANAGE_MAPPING_ERR: abi::U32 = abi::num(4);
pub const IWPM_NLA_RMANAGE_MAPPING_MAX: abi::U32 = abi::num(5);

pub const IWPM_NLA_MAPINFO_SEND_MAX: abi::U32 = abi::num(3);
pub const IWPM_NLA_REMOVE_MAPPING_MAX: abi::U32 = abi::num(3);

// Attributes of `NL_IWPM_QUERY_MAPPING` requests.
pub const IWPM_NLA_QUERY_MAPPING_UNSPEC: abi::U32 = abi::num(0);
pub const IWPM_NLA_QUERY_MAPPING_SEQ: abi::U32 = abi::num(1);
pub const IWPM_NLA_QUERY_LOCAL_ADDR: abi::U32 = abi::num(2);
pub const IWPM_NLA_QUERY_REMOTE_ADDR: abi::U32 = abi::num(3);
pub const IWPM_NLA_QUERY_FLAGS: abi::U32 = abi::num(4);
pub const IWPM_NLA_QUERY_MAPPING_MAX: abi::U32 = abi::num(5);

// Attributes of `NL_IWPM_QUERY_MAPPING` replies.
pub const IWPM_NLA_RQUERY_MAPPING_UNSPEC: abi::U32 = abi::num(0);
pub const IWPM_NLA_RQUERY_MAPPING_SEQ: abi::U32 = abi::num(1);
pub const IWPM_NLA_RQUERY_LOCAL_ADDR: abi::U32 = abi::num(2);
pub const IWPM_NLA_RQUERY_REMOTE_ADDR: abi::U32 = abi::num(3);
pub const IWPM_NLA_RQUERY_MAPPED_LOC_ADDR: abi::U32 = abi::num(4);
pub const IWPM_NLA_RQUERY_MAPPED_REM_ADDR: abi::U32 = abi::num(5);
pub const IWPM_NLA_RQUERY_MAPPING_ERR: abi::U32 = abi::num(6);
pub const IWPM_NLA_RQUERY_MAPPING_MAX: abi::U32 = abi::num(7);

// Attributes of `NL_IWPM_MAPINFO` requests.
pub const IWPM_NLA_MAPINFO_REQ_UNSPEC: abi::U32 = abi::num(0);
pub const IWPM_NLA_MAPINFO_ULIB_NAME: abi::U32 = abi::num(1);
pub const IWPM_NLA_MAPINFO_ULIB_VER: abi::U32 = abi::num(2);
pub const IWPM_NLA_MAPINFO_REQ_MAX: abi::U32 = abi::num(3);

// Attributes of `NL_IWPM_MAPINFO` entries.
pub const IWPM_NLA_MAPINFO_UNSPEC: abi::U32 = abi::num(0);
pub const IWPM_NLA_MAPINFO_LOCAL_ADDR: abi::U32 = abi::num(1);
pub const IWPM_NLA_MAPINFO_MAPPED_ADDR: abi::U32 = abi::num(2);
pub const IWPM_NLA_MAPINFO_FLAGS: abi::U32 = abi::num(3);
pub const IWPM_NLA_MAPINFO_MAX: abi::U32 = abi::num(4);

// Attributes of `NL_IWPM_MAPINFO_NUM` messages.
pub const IWPM_NLA_MAPINFO_NUM_UNSPEC: abi::U32 = abi::num(0);
pub const IWPM_NLA_MAPINFO_SEQ: abi::U32 = abi::num(1);
pub const IWPM_NLA_MAPINFO_SEND_NUM: abi::U32 = abi::num(2);
pub const IWPM_NLA_MAPINFO_ACK_NUM: abi::U32 = abi::num(3);
pub const IWPM_NLA_MAPINFO_NUM_MAX: abi::U32 = abi::num(4);

// Attributes of `NL_IWPM_HANDLE_ERR` messages.
pub const IWPM_NLA_ERR_UNSPEC: abi::U32 = abi::num(0);
pub const IWPM_NLA_ERR_SEQ: abi::U32 = abi::num(1);
pub const IWPM_NLA_ERR_CODE: abi::U32 = abi::num(2);
pub const IWPM_NLA_ERR_MAX: abi::U32 = abi::num(3);

// Attributes of `NL_IWPM_HELLO` messages.
pub const IWPM_NLA_HELLO_UNSPEC: abi::U32 = abi::num(0);
pub const IWPM_NLA_HELLO_ABI_VERSION: abi::U32 = abi::num(1);
pub const IWPM_NLA_HELLO_MAX: abi::U32 = abi::num(2);

// Node types.
pub const NODE_IB_CA: abi::U32 = abi::num(1);
pub const NODE_IB_SWITCH: abi::U32 = abi::num(2);
pub const NODE_IB_ROUTER: abi::U32 = abi::num(3);
pub const NODE_RNIC: abi::U32 = abi::num(4);
pub const NODE_USNIC: abi::U32 = abi::num(5);
pub const NODE_USNIC_UDP: abi::U32 = abi::num(6);
pub const NODE_UNSPECIFIED: abi::U32 = abi::num(7);

// Operations of the local service client.
pub const NL_LS_OP_RESOLVE: abi::U32 = abi::num(0);
pub const NL_LS_OP_SET_TIMEOUT: abi::U32 = abi::num(1);
pub const NL_LS_OP_IP_RESOLVE: abi::U32 = abi::num(2);
pub const NL_LS_NUM_OPS: abi::U32 = abi::num(3);

pub const NL_LS_F_ERR: abi::U16 = abi::num(0x0100);

// Path usage of `NL_LS_OP_RESOLVE`.
pub const LS_RESOLVE_PATH_USE_ALL: abi::U32 = abi::num(0);
pub const LS_RESOLVE_PATH_USE_UNIDIRECTIONAL: abi::U32 = abi::num(1);
pub const LS_RESOLVE_PATH_USE_GMP: abi::U32 = abi::num(2);
pub const LS_RESOLVE_PATH_USE_MAX: abi::U32 = abi::num(3);

pub const LS_DEVICE_NAME_MAX: usize = 64;

/// Fixed header of `NL_LS_OP_RESOLVE` requests.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct LsResolveHeader {
    pub device_name: [abi::U8; LS_DEVICE_NAME_MAX],
    pub port_num: abi::U8,
    pub path_use: abi::U8,
}

/// Fixed header of `NL_LS_OP_IP_RESOLVE` requests.
#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct LsIpResolveHeader {
    pub ifindex: abi::U32,
}

pub const NLA_F_MANDATORY: abi::U16 = abi::num(1u16 << 13);
pub const NLA_TYPE_MASK: abi::U16 = abi::num(!((1u16 << 15) | (1 << 14) | (1 << 13)));

// Attribute types of the local service client.
pub const LS_NLA_TYPE_UNSPEC: abi::U32 = abi::num(0);
pub const LS_NLA_TYPE_PATH_RECORD: abi::U32 = abi::num(1);
pub const LS_NLA_TYPE_TIMEOUT: abi::U32 = abi::num(2);
pub const LS_NLA_TYPE_SERVICE_ID: abi::U32 = abi::num(3);
pub const LS_NLA_TYPE_DGID: abi::U32 = abi::num(4);
pub const LS_NLA_TYPE_SGID: abi::U32 = abi::num(5);
pub const LS_NLA_TYPE_TCLASS: abi::U32 = abi::num(6);
pub const LS_NLA_TYPE_PKEY: abi::U32 = abi::num(7);
pub const LS_NLA_TYPE_QOS_CLASS: abi::U32 = abi::num(8);
pub const LS_NLA_TYPE_IPV4: abi::U32 = abi::num(9);
pub const LS_NLA_TYPE_IPV6: abi::U32 = abi::num(10);
pub const LS_NLA_TYPE_MAX: abi::U32 = abi::num(11);

#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct NlaLsGid {
    pub gid: [abi::U8; 16],
}

// Commands of the device client.
pub const NLDEV_CMD_UNSPEC: abi::U32 = abi::num(0);
pub const NLDEV_CMD_GET: abi::U32 = abi::num(1);
pub const NLDEV_CMD_SET: abi::U32 = abi::num(2);
pub const NLDEV_CMD_NEWLINK: abi::U32 = abi::num(3);
pub const NLDEV_CMD_DELLINK: abi::U32 = abi::num(4);
pub const NLDEV_CMD_PORT_GET: abi::U32 = abi::num(5);
pub const NLDEV_CMD_SYS_GET: abi::U32 = abi::num(6);
pub const NLDEV_CMD_SYS_SET: abi::U32 = abi::num(7);
pub const NLDEV_CMD_RES_GET: abi::U32 = abi::num(9);
pub const NLDEV_CMD_RES_QP_GET: abi::U32 = abi::num(10);
pub const NLDEV_CMD_RES_CM_ID_GET: abi::U32 = abi::num(11);
pub const NLDEV_CMD_RES_CQ_GET: abi::U32 = abi::num(12);
pub const NLDEV_CMD_RES_MR_GET: abi::U32 = abi::num(13);
pub const NLDEV_CMD_RES_PD_GET: abi::U32 = abi::num(14);
pub const NLDEV_CMD_GET_CHARDEV: abi::U32 = abi::num(15);
pub const NLDEV_CMD_STAT_SET: abi::U32 = abi::num(16);
pub const NLDEV_CMD_STAT_GET: abi::U32 = abi::num(17);
pub const NLDEV_CMD_STAT_DEL: abi::U32 = abi::num(18);
pub const NLDEV_CMD_RES_QP_GET_RAW: abi::U32 = abi::num(19);
pub const NLDEV_CMD_RES_CQ_GET_RAW: abi::U32 = abi::num(20);
pub const NLDEV_CMD_RES_MR_GET_RAW: abi::U32 = abi::num(21);
pub const NLDEV_CMD_RES_CTX_GET: abi::U32 = abi::num(22);
pub const NLDEV_CMD_RES_SRQ_GET: abi::U32 = abi::num(23);
pub const NLDEV_CMD_STAT_GET_STATUS: abi::U32 = abi::num(24);
pub const NLDEV_CMD_RES_SRQ_GET_RAW: abi::U32 = abi::num(25);
pub const NLDEV_NUM_OPS: abi::U32 = abi::num(26);

// Print types of driver attributes.
pub const NLDEV_PRINT_TYPE_UNSPEC: abi::U32 = abi::num(0);
pub const NLDEV_PRINT_TYPE_HEX: abi::U32 = abi::num(1);

// Attributes of the device client. Append-only.
pub const NLDEV_ATTR_UNSPEC: abi::U32 = abi::num(0);
pub const NLDEV_ATTR_PAD: abi::U32 = abi::num(0);
pub const NLDEV_ATTR_DEV_INDEX: abi::U32 = abi::num(1);
pub const NLDEV_ATTR_DEV_NAME: abi::U32 = abi::num(2);
pub const NLDEV_ATTR_PORT_INDEX: abi::U32 = abi::num(3);
pub const NLDEV_ATTR_CAP_FLAGS: abi::U32 = abi::num(4);
pub const NLDEV_ATTR_FW_VERSION: abi::U32 = abi::num(5);
pub const NLDEV_ATTR_NODE_GUID: abi::U32 = abi::num(6);
pub const NLDEV_ATTR_SYS_IMAGE_GUID: abi::U32 = abi::num(7);
pub const NLDEV_ATTR_SUBNET_PREFIX: abi::U32 = abi::num(8);
pub const NLDEV_ATTR_LID: abi::U32 = abi::num(9);
pub const NLDEV_ATTR_SM_LID: abi::U32 = abi::num(10);
pub const NLDEV_ATTR_LMC: abi::U32 = abi::num(11);
pub const NLDEV_ATTR_PORT_STATE: abi::U32 = abi::num(12);
pub const NLDEV_ATTR_PORT_PHYS_STATE: abi::U32 = abi::num(13);
pub const NLDEV_ATTR_DEV_NODE_TYPE: abi::U32 = abi::num(14);
pub const NLDEV_ATTR_RES_SUMMARY: abi::U32 = abi::num(15);
pub const NLDEV_ATTR_RES_SUMMARY_ENTRY: abi::U32 = abi::num(16);
pub const NLDEV_ATTR_RES_SUMMARY_ENTRY_NAME: abi::U32 = abi::num(17);
pub const NLDEV_ATTR_RES_SUMMARY_ENTRY_CURR: abi::U32 = abi::num(18);
pub const NLDEV_ATTR_RES_QP: abi::U32 = abi::num(19);
pub const NLDEV_ATTR_RES_QP_ENTRY: abi::U32 = abi::num(20);
pub const NLDEV_ATTR_RES_LQPN: abi::U32 = abi::num(21);
pub const NLDEV_ATTR_RES_RQPN: abi::U32 = abi::num(22);
pub const NLDEV_ATTR_RES_RQ_PSN: abi::U32 = abi::num(23);
pub const NLDEV_ATTR_RES_SQ_PSN: abi::U32 = abi::num(24);
pub const NLDEV_ATTR_RES_PATH_MIG_STATE: abi::U32 = abi::num(25);
pub const NLDEV_ATTR_RES_TYPE: abi::U32 = abi::num(26);
pub const NLDEV_ATTR_RES_STATE: abi::U32 = abi::num(27);
pub const NLDEV_ATTR_RES_PID: abi::U32 = abi::num(28);
pub const NLDEV_ATTR_RES_KERN_NAME: abi::U32 = abi::num(29);
pub const NLDEV_ATTR_RES_CM_ID: abi::U32 = abi::num(30);
pub const NLDEV_ATTR_RES_CM_ID_ENTRY: abi::U32 = abi::num(31);
pub const NLDEV_ATTR_RES_PS: abi::U32 = abi::num(32);
pub const NLDEV_ATTR_RES_SRC_ADDR: abi::U32 = abi::num(33);
pub const NLDEV_ATTR_RES_DST_ADDR: abi::U32 = abi::num(34);
pub const NLDEV_ATTR_RES_CQ: abi::U32 = abi::num(35);
pub const NLDEV_ATTR_RES_CQ_ENTRY: abi::U32 = abi::num(36);
pub const NLDEV_ATTR_RES_CQE: abi::U32 = abi::num(37);
pub const NLDEV_ATTR_RES_USECNT: abi::U32 = abi::num(38);
pub const NLDEV_ATTR_RES_POLL_CTX: abi::U32 = abi::num(39);
pub const NLDEV_ATTR_RES_MR: abi::U32 = abi::num(40);
pub const NLDEV_ATTR_RES_MR_ENTRY: abi::U32 = abi::num(41);
pub const NLDEV_ATTR_RES_RKEY: abi::U32 = abi::num(42);
pub const NLDEV_ATTR_RES_LKEY: abi::U32 = abi::num(43);
pub const NLDEV_ATTR_RES_IOVA: abi::U32 = abi::num(44);
pub const NLDEV_ATTR_RES_MRLEN: abi::U32 = abi::num(45);
pub const NLDEV_ATTR_RES_PD: abi::U32 = abi::num(46);
pub const NLDEV_ATTR_RES_PD_ENTRY: abi::U32 = abi::num(47);
pub const NLDEV_ATTR_RES_LOCAL_DMA_LKEY: abi::U32 = abi::num(48);
pub const NLDEV_ATTR_RES_UNSAFE_GLOBAL_RKEY: abi::U32 = abi::num(49);
pub const NLDEV_ATTR_NDEV_INDEX: abi::U32 = abi::num(50);
pub const NLDEV_ATTR_NDEV_NAME: abi::U32 = abi::num(51);
pub const NLDEV_ATTR_DRIVER: abi::U32 = abi::num(52);
pub const NLDEV_ATTR_DRIVER_ENTRY: abi::U32 = abi::num(53);
pub const NLDEV_ATTR_DRIVER_STRING: abi::U32 = abi::num(54);
pub const NLDEV_ATTR_DRIVER_PRINT_TYPE: abi::U32 = abi::num(55);
pub const NLDEV_ATTR_DRIVER_S32: abi::U32 = abi::num(56);
pub const NLDEV_ATTR_DRIVER_U32: abi::U32 = abi::num(57);
pub const NLDEV_ATTR_DRIVER_S64: abi::U32 = abi::num(58);
pub const NLDEV_ATTR_DRIVER_U64: abi::U32 = abi::num(59);
pub const NLDEV_ATTR_RES_PDN: abi::U32 = abi::num(60);
pub const NLDEV_ATTR_RES_CQN: abi::U32 = abi::num(61);
pub const NLDEV_ATTR_RES_MRN: abi::U32 = abi::num(62);
pub const NLDEV_ATTR_RES_CM_IDN: abi::U32 = abi::num(63);
pub const NLDEV_ATTR_RES_CTXN: abi::U32 = abi::num(64);
pub const NLDEV_ATTR_LINK_TYPE: abi::U32 = abi::num(65);
pub const NLDEV_SYS_ATTR_NETNS_MODE: abi::U32 = abi::num(66);
pub const NLDEV_ATTR_DEV_PROTOCOL: abi::U32 = abi::num(67);
pub const NLDEV_NET_NS_FD: abi::U32 = abi::num(68);
pub const NLDEV_ATTR_CHARDEV_TYPE: abi::U32 = abi::num(69);
pub const NLDEV_ATTR_CHARDEV_NAME: abi::U32 = abi::num(70);
pub const NLDEV_ATTR_CHARDEV_ABI: abi::U32 = abi::num(71);
pub const NLDEV_ATTR_CHARDEV: abi::U32 = abi::num(72);
pub const NLDEV_ATTR_UVERBS_DRIVER_ID: abi::U32 = abi::num(73);
pub const NLDEV_ATTR_STAT_MODE: abi::U32 = abi::num(74);
pub const NLDEV_ATTR_STAT_RES: abi::U32 = abi::num(75);
pub const NLDEV_ATTR_STAT_AUTO_MODE_MASK: abi::U32 = abi::num(76);
pub const NLDEV_ATTR_STAT_COUNTER: abi::U32 = abi::num(77);
pub const NLDEV_ATTR_STAT_COUNTER_ENTRY: abi::U32 = abi::num(78);
pub const NLDEV_ATTR_STAT_COUNTER_ID: abi::U32 = abi::num(79);
pub const NLDEV_ATTR_STAT_HWCOUNTERS: abi::U32 = abi::num(80);
pub const NLDEV_ATTR_STAT_HWCOUNTER_ENTRY: abi::U32 = abi::num(81);
pub const NLDEV_ATTR_STAT_HWCOUNTER_ENTRY_NAME: abi::U32 = abi::num(82);
pub const NLDEV_ATTR_STAT_HWCOUNTER_ENTRY_VALUE: abi::U32 = abi::num(83);
pub const NLDEV_ATTR_DEV_DIM: abi::U32 = abi::num(84);
pub const NLDEV_ATTR_RES_RAW: abi::U32 = abi::num(85);
pub const NLDEV_ATTR_RES_CTX: abi::U32 = abi::num(86);
pub const NLDEV_ATTR_RES_CTX_ENTRY: abi::U32 = abi::num(87);
pub const NLDEV_ATTR_RES_SRQ: abi::U32 = abi::num(88);
pub const NLDEV_ATTR_RES_SRQ_ENTRY: abi::U32 = abi::num(89);
pub const NLDEV_ATTR_RES_SRQN: abi::U32 = abi::num(90);
pub const NLDEV_ATTR_MIN_RANGE: abi::U32 = abi::num(91);
pub const NLDEV_ATTR_MAX_RANGE: abi::U32 = abi::num(92);
pub const NLDEV_SYS_ATTR_COPY_ON_FORK: abi::U32 = abi::num(93);
pub const NLDEV_ATTR_STAT_HWCOUNTER_INDEX: abi::U32 = abi::num(94);
pub const NLDEV_ATTR_STAT_HWCOUNTER_DYNAMIC: abi::U32 = abi::num(95);
pub const NLDEV_SYS_ATTR_PRIVILEGED_QKEY_MODE: abi::U32 = abi::num(96);
pub const NLDEV_ATTR_DRIVER_DETAILS: abi::U32 = abi::num(97);
pub const NLDEV_ATTR_RES_SUBTYPE: abi::U32 = abi::num(98);
pub const NLDEV_ATTR_MAX: abi::U32 = abi::num(99);

// Counter binding modes.
pub const COUNTER_MODE_NONE: abi::U32 = abi::num(0);
pub const COUNTER_MODE_AUTO: abi::U32 = abi::num(1);
pub const COUNTER_MODE_MANUAL: abi::U32 = abi::num(2);
pub const COUNTER_MODE_MAX: abi::U32 = abi::num(3);

// Counter binding criteria.
pub const COUNTER_MASK_QP_TYPE: abi::U32 = abi::num(1);
pub const COUNTER_MASK_PID: abi::U32 = abi::num(2);
