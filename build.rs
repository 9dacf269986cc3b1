use std::process::Command;

fn date_stamp(format: &str) -> String {
	let output = Command::new("date")
		.arg(format)
		.output()
		.expect("Failed to run date");
	String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn main() {
	println!("cargo:rustc-env=COMPILE_DATE={}", date_stamp("+%Y-%m-%d"));
	println!("cargo:rustc-env=COMPILE_TIME={}", date_stamp("+%H:%M:%S"));
}
