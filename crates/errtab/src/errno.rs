//! Well-known error codes.
//!
//! Generic codes combine a portable class in bits `15:8` with the PXE status
//! that best describes the failure to a PXE caller in bits `7:0`. The PXE
//! statuses on their own are the values defined by the PXE 2.1 API.

use crate::code::ErrorCode;

const fn generic(class: u8, status: u8) -> i32 {
	ErrorCode::compose(class, status).as_i32()
}

pub const PXENV_STATUS_SUCCESS: u8 = 0x00;
pub const PXENV_STATUS_FAILURE: u8 = 0x01;
pub const PXENV_STATUS_BAD_FUNC: u8 = 0x02;
pub const PXENV_STATUS_UNSUPPORTED: u8 = 0x03;
pub const PXENV_STATUS_KEEP_UNDI: u8 = 0x04;
pub const PXENV_STATUS_KEEP_ALL: u8 = 0x05;
pub const PXENV_STATUS_OUT_OF_RESOURCES: u8 = 0x06;
pub const PXENV_STATUS_ARP_TIMEOUT: u8 = 0x11;
pub const PXENV_STATUS_UDP_CLOSED: u8 = 0x18;
pub const PXENV_STATUS_UDP_OPEN: u8 = 0x19;
pub const PXENV_STATUS_TFTP_CLOSED: u8 = 0x1a;
pub const PXENV_STATUS_TFTP_OPEN: u8 = 0x1b;
pub const PXENV_STATUS_TFTP_CANNOT_ARP_ADDRESS: u8 = 0x30;
pub const PXENV_STATUS_TFTP_OPEN_TIMEOUT: u8 = 0x32;
pub const PXENV_STATUS_TFTP_UNKNOWN_OPCODE: u8 = 0x33;
pub const PXENV_STATUS_TFTP_READ_TIMEOUT: u8 = 0x35;
pub const PXENV_STATUS_TFTP_ERROR_OPCODE: u8 = 0x36;
pub const PXENV_STATUS_TFTP_CANNOT_OPEN_CONNECTION: u8 = 0x38;
pub const PXENV_STATUS_TFTP_CANNOT_READ_FROM_CONNECTION: u8 = 0x39;
pub const PXENV_STATUS_TFTP_TOO_MANY_PACKAGES: u8 = 0x3a;
pub const PXENV_STATUS_TFTP_FILE_NOT_FOUND: u8 = 0x3b;
pub const PXENV_STATUS_TFTP_ACCESS_VIOLATION: u8 = 0x3c;
pub const PXENV_STATUS_TFTP_NO_MCAST_ADDRESS: u8 = 0x3d;
pub const PXENV_STATUS_TFTP_NO_FILESIZE: u8 = 0x3e;
pub const PXENV_STATUS_TFTP_INVALID_PACKET_SIZE: u8 = 0x3f;

pub const ENOERR: i32 = 0;
pub const EACCES: i32 = generic(0x02, PXENV_STATUS_TFTP_ACCESS_VIOLATION);
pub const EINVAL: i32 = generic(0x1c, PXENV_STATUS_BAD_FUNC);
pub const EIO: i32 = generic(0x1d, PXENV_STATUS_TFTP_CANNOT_READ_FROM_CONNECTION);
pub const ENETUNREACH: i32 = generic(0x28, PXENV_STATUS_ARP_TIMEOUT);
pub const ENOENT: i32 = generic(0x2d, PXENV_STATUS_TFTP_FILE_NOT_FOUND);
pub const ENOMEM: i32 = generic(0x31, PXENV_STATUS_OUT_OF_RESOURCES);
pub const ENOSPC: i32 = generic(0x32, PXENV_STATUS_OUT_OF_RESOURCES);
pub const ETIMEDOUT: i32 = generic(0x4b, PXENV_STATUS_TFTP_READ_TIMEOUT);
