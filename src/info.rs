use std::env;
use std::sync::Once;

use log::info;

/// Log program and compile information (only once per process).
pub fn print_compile_info() {
	static PRINT_COMPILE_ONCE: Once = Once::new();
	PRINT_COMPILE_ONCE.call_once(|| {
		let program_name = env::current_exe()
			.ok()
			.as_ref()
			.and_then(|path| path.file_name())
			.and_then(|name| name.to_str())
			.unwrap_or("Unknown Program")
			.to_string();

		info!("Program: {}", program_name);
		info!(
			"Compiled on: {} at {}",
			env!("COMPILE_DATE"),
			env!("COMPILE_TIME")
		);
		info!("Version: {}", env!("CARGO_PKG_VERSION"));
	});
}
