use errtab_registry::{RegistrySource, error_table};

use crate::errno::*;

// Class bits are zero, so these only ever match through the subsystem tier
// unless a caller raises a bare PXE status.
error_table!(PXE_ERRORS, source: RegistrySource::Builtin, [
	(PXENV_STATUS_FAILURE as i32, "PXE failure"),
	(PXENV_STATUS_BAD_FUNC as i32, "Bad PXE API function"),
	(PXENV_STATUS_UNSUPPORTED as i32, "Unsupported PXE API function"),
	(PXENV_STATUS_KEEP_UNDI as i32, "UNDI must remain loaded"),
	(PXENV_STATUS_KEEP_ALL as i32, "Base code and UNDI must remain loaded"),
	(PXENV_STATUS_OUT_OF_RESOURCES as i32, "Out of resources"),
	(PXENV_STATUS_ARP_TIMEOUT as i32, "ARP timeout"),
	(PXENV_STATUS_UDP_CLOSED as i32, "UDP connection closed"),
	(PXENV_STATUS_UDP_OPEN as i32, "UDP connection already open"),
	(PXENV_STATUS_TFTP_CLOSED as i32, "TFTP connection closed"),
	(PXENV_STATUS_TFTP_OPEN as i32, "TFTP connection already open"),
	(PXENV_STATUS_TFTP_CANNOT_ARP_ADDRESS as i32, "Cannot resolve TFTP server address"),
	(PXENV_STATUS_TFTP_OPEN_TIMEOUT as i32, "TFTP open timeout"),
	(PXENV_STATUS_TFTP_UNKNOWN_OPCODE as i32, "Unknown TFTP opcode"),
	(PXENV_STATUS_TFTP_READ_TIMEOUT as i32, "TFTP read timeout"),
	(PXENV_STATUS_TFTP_ERROR_OPCODE as i32, "TFTP error opcode"),
	(PXENV_STATUS_TFTP_CANNOT_OPEN_CONNECTION as i32, "Cannot open TFTP connection"),
	(PXENV_STATUS_TFTP_CANNOT_READ_FROM_CONNECTION as i32, "Cannot read from TFTP connection"),
	(PXENV_STATUS_TFTP_TOO_MANY_PACKAGES as i32, "Too many TFTP packets"),
	(PXENV_STATUS_TFTP_FILE_NOT_FOUND as i32, "TFTP file not found"),
	(PXENV_STATUS_TFTP_ACCESS_VIOLATION as i32, "TFTP access violation"),
	(PXENV_STATUS_TFTP_NO_MCAST_ADDRESS as i32, "No multicast address"),
	(PXENV_STATUS_TFTP_NO_FILESIZE as i32, "TFTP file size unavailable"),
	(PXENV_STATUS_TFTP_INVALID_PACKET_SIZE as i32, "Invalid TFTP packet size"),
]);
