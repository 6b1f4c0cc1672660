//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::{self, Write};

use crate::cli::args::Cli;

/// Write the completion script for `shell` into `out`.
pub fn write(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let command_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, command_name, out);
}

/// Print completion script for the requested shell to stdout.
pub fn print(shell: Shell) {
    write(shell, &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bash_script_mentions_subcommands() {
        let mut buf = Vec::new();
        write(Shell::Bash, &mut buf);

        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("draftdesk"));
        assert!(script.contains("schedule"));
        assert!(script.contains("email"));
    }
}
