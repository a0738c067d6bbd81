use errtab_registry::TableBuilder;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use super::*;

static NO_ERROR: ErrorEntry = ErrorEntry::builtin(0, "No error");
static NO_MEMORY: ErrorEntry = ErrorEntry::builtin(0x2306, "Out of memory");
static TFTP_NOT_FOUND: ErrorEntry = ErrorEntry::builtin(0x003b, "TFTP file not found");

fn table() -> ErrorTable {
	TableBuilder::new("test")
		.push(&NO_ERROR)
		.push(&NO_MEMORY)
		.push(&TFTP_NOT_FOUND)
		.build()
}

#[rstest]
#[case(0, "No error (0x00000000)")]
#[case(0x2306, "Out of memory (0x00002306)")]
#[case(-0x2306, "Out of memory (0x00002306)")]
#[case(0x0042_2306, "Out of memory (0x00422306)")]
#[case(0x0000_613b, "TFTP file not found (0x0000613b)")]
#[case(0x0000_4c01, "Error 0x00004c01")]
#[case(-0x0000_4c01, "Error 0x00004c01")]
#[case(i32::MIN, "No error (0x80000000)")]
fn describes_codes(#[case] status: i32, #[case] text: &str) {
	let table = table();
	assert_eq!(Renderer::new(&table).describe(status), text);
}

#[test]
fn empty_table_renders_generic_fallback() {
	let table = ErrorTable::empty("empty");
	let renderer = Renderer::new(&table);

	assert_eq!(renderer.describe(0), "Error 0x00000000");
	assert_eq!(renderer.describe(-5), "Error 0x00000005");
	assert_eq!(renderer.describe(i32::MAX), "Error 0x7fffffff");
}

#[test]
fn fallback_reports_the_raised_code() {
	let table = table();
	let description = Renderer::new(&table).resolve(-0x0042_2306);

	assert_eq!(description.code, ErrorCode(0x0042_2306));
	assert!(std::ptr::eq(description.entry.unwrap(), &NO_MEMORY));
	assert_eq!(description.to_string(), "Out of memory (0x00422306)");
}

#[test]
fn describe_into_overwrites_previous_result() {
	let table = table();
	let renderer = Renderer::new(&table);
	let mut buf: MessageBuf = MessageBuf::new();

	let first = renderer.describe_into(0x2306, &mut buf).to_owned();
	assert_eq!(first, "Out of memory (0x00002306)");

	// The second call reuses the storage; the first text is gone from it.
	let second = renderer.describe_into(0x4c01, &mut buf);
	assert_eq!(second, "Error 0x00004c01");
	assert_eq!(buf.as_str(), "Error 0x00004c01");
	assert!(!buf.is_truncated());
}

#[test]
fn long_descriptions_keep_their_leading_text() {
	static VERBOSE: ErrorEntry = ErrorEntry::builtin(
		0x2306,
		"Out of memory while allocating receive descriptors for the second port",
	);
	let table = TableBuilder::new("test").push(&VERBOSE).build();
	let mut buf: MessageBuf = MessageBuf::new();

	let text = Renderer::new(&table).describe_into(0x2306, &mut buf);
	assert_eq!(text.len(), RENDER_CAPACITY);
	assert!(text.starts_with("Out of memory while allocating"));
	assert!(!text.contains("0x00002306"));
	assert!(buf.is_truncated());
}

#[test]
fn small_buffer_cuts_on_char_boundary() {
	static ACCENTED: ErrorEntry = ErrorEntry::builtin(0x2306, "Mémoire épuisée");
	let table = TableBuilder::new("test").push(&ACCENTED).build();
	let mut buf = MessageBuf::<10>::new();

	// "Mémoire é" is 11 bytes; the cut backs off to the previous boundary.
	let text = Renderer::new(&table).describe_into(0x2306, &mut buf);
	assert_eq!(text, "Mémoire ");
	assert!(buf.is_truncated());
	assert_eq!(buf.capacity(), 10);
}

#[test]
fn truncated_output_is_a_prefix_of_the_full_message() {
	static WIDE_TAIL: ErrorEntry = ErrorEntry::builtin(
		0x2306,
		"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaé",
	);
	let table = TableBuilder::new("test").push(&WIDE_TAIL).build();
	let renderer = Renderer::new(&table);
	let full = renderer.describe(0x2306);
	let mut buf: MessageBuf = MessageBuf::new();

	// The description is 63 ASCII bytes and a two-byte char; the char does
	// not fit and nothing after it may slip into the spare byte.
	let text = renderer.describe_into(0x2306, &mut buf);
	assert_eq!(text.len(), 63);
	assert!(text.chars().all(|c| c == 'a'));
	assert!(full.starts_with(text));
	assert!(buf.is_truncated());
}

#[test]
fn writes_after_truncation_are_dropped() {
	let mut buf = MessageBuf::<10>::new();
	fmt::Write::write_str(&mut buf, "Mémoire épuisée").unwrap();
	fmt::Write::write_str(&mut buf, " (").unwrap();
	fmt::Write::write_str(&mut buf, "0x").unwrap();

	assert_eq!(buf.as_str(), "Mémoire ");
	assert!(buf.is_truncated());
}

#[test]
fn message_buf_clear_resets_truncation() {
	let mut buf = MessageBuf::<4>::new();
	fmt::Write::write_str(&mut buf, "abcdef").unwrap();
	assert_eq!(&*buf, "abcd");
	assert!(buf.is_truncated());

	buf.clear();
	assert_eq!(buf.as_str(), "");
	assert!(!buf.is_truncated());
}

#[test]
fn layout_is_forwarded_to_resolver() {
	let layout = CodeLayout::new(0x7fff_ffff, 0xffff, 0x0f).unwrap();
	let table = table();
	let renderer = Renderer::new(&table).with_layout(layout);

	assert_eq!(renderer.resolver().layout(), &layout);
	// Sub-code 0x30 only shares the low nibble with the "No error" entry.
	assert_eq!(renderer.describe(0x0030), "No error (0x00000030)");
}

proptest! {
	#[test]
	fn message_buf_keeps_a_prefix(fragments in prop::collection::vec("[a-zé€ (x0-9)]{0,8}", 0..12)) {
		let mut buf = MessageBuf::<16>::new();
		for fragment in &fragments {
			fmt::Write::write_str(&mut buf, fragment).unwrap();
		}
		let full = fragments.concat();
		prop_assert!(full.starts_with(buf.as_str()));
		prop_assert!(buf.len() <= 16);
		prop_assert_eq!(buf.is_truncated(), buf.len() < full.len());
	}

	#[test]
	fn sign_is_normalized(status in any::<i32>()) {
		let table = table();
		let renderer = Renderer::new(&table);
		prop_assert_eq!(renderer.describe(status), renderer.describe(status.wrapping_neg()));
	}

	#[test]
	fn unmatched_codes_render_fixed_width_hex(status in any::<i32>()) {
		let table = ErrorTable::empty("empty");
		let text = Renderer::new(&table).describe(status);
		prop_assert_eq!(text, format!("Error 0x{:08x}", status.unsigned_abs()));
	}
}
