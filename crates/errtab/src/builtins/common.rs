use errtab_registry::{RegistrySource, error_table};

use crate::errno::*;

error_table!(COMMON_ERRORS, source: RegistrySource::Builtin, [
	(ENOERR, "No error"),
	(ENOMEM, "Out of memory"),
	(EINVAL, "Invalid argument"),
	(ENOSPC, "No space left on device"),
	(EIO, "Input/output error"),
	(EACCES, "Permission denied"),
	(ENOENT, "File not found"),
	(ENETUNREACH, "Network unreachable"),
	(ETIMEDOUT, "Connection timed out"),
]);
