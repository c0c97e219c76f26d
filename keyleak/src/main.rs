// SPDX-FileCopyrightText: 2026 LunNova
//
// SPDX-License-Identifier: MIT

use keyleak::Status;

fn main() -> std::process::ExitCode {
	let args: Vec<String> = std::env::args().skip(1).collect();
	let args_refs: Vec<&str> = args.iter().map(String::as_str).collect();
	match keyleak::run(&args_refs, &mut std::io::stdout().lock()) {
		Status::Exit(code) => std::process::ExitCode::from(code),
		Status::Abort => std::process::abort(),
	}
}
