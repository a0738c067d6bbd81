//! Registration macros for error tables.

/// Declares a table of error descriptions and contributes it to [`ERRORS`].
///
/// Expands to a `pub static` array of [`ErrorEntry`] submitted through
/// `inventory`. Entries keep their declaration order inside the table. The
/// source defaults to the calling crate's name.
///
/// ```rust,ignore
/// errtab_registry::error_table!(NET_ERRORS, [
///     (0x2711, "Link down"),
///     (0x2712, "No carrier"),
/// ]);
///
/// errtab_registry::error_table!(CORE_ERRORS, source: RegistrySource::Builtin, [
///     (0, "No error"),
/// ]);
/// ```
///
/// [`ERRORS`]: crate::ERRORS
/// [`ErrorEntry`]: crate::ErrorEntry
#[macro_export]
macro_rules! error_table {
	($name:ident, [$(($code:expr, $text:expr)),* $(,)?]) => {
		$crate::error_table!(
			$name,
			source: $crate::RegistrySource::Crate(env!("CARGO_PKG_NAME")),
			[$(($code, $text)),*]
		);
	};
	($name:ident, source: $source:expr, [$(($code:expr, $text:expr)),* $(,)?]) => {
		#[allow(non_upper_case_globals)]
		pub static $name: [$crate::ErrorEntry; <[()]>::len(&[$($crate::__unit!($code)),*])] = [
			$($crate::ErrorEntry::new($code, $text, $source)),*
		];

		$crate::inventory::submit! { $crate::ErrorTableReg(&$name) }
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __unit {
	($_x:expr) => {
		()
	};
}
