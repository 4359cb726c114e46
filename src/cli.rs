use clap::{crate_version, Arg, ArgAction, Command, ValueHint};

const IN_HELP: &str = "if the program is piped, omit `--file` option";
const NUM_LONG_HELP: &str = "BBC BASIC V keeps line numbers in the record header, not in the text.
Without this flag only the text of each line is written, as the original listing tools do.";

fn file_arg(help: &'static str) -> Arg {
    Arg::new("file").short('f').long("file").value_name("PATH").help(help)
        .value_hint(ValueHint::FilePath)
        .required(false)
}

pub fn build_cli() -> Command {
    let long_help = "bbckit is always invoked with exactly one of several subcommands.
The subcommands are generally designed to function as nodes in a pipeline.
Set RUST_LOG environment variable to control logging level.
  levels: trace,debug,info,warn,error

Examples:
---------
detokenize a file:     `bbckit detokenize -f PROG,ffb`
detokenize a pipe:     `cat PROG,ffb | bbckit dtok -n > prog.txt`";

    let mut main_cmd = Command::new("bbckit")
        .about("Decodes tokenized BBC BASIC V programs.")
        .after_long_help(long_help)
        .version(crate_version!());
    main_cmd = main_cmd.subcommand(
        Command::new("detokenize")
            .arg(file_arg("path to tokenized program"))
            .arg(
                Arg::new("number").short('n').long("number").help("prefix each line with its line number")
                    .long_help(NUM_LONG_HELP)
                    .action(ArgAction::SetTrue),
            )
            .visible_alias("dtok")
            .about("read tokenized program, detokenize, write to stdout")
            .after_help(IN_HELP),
    );
    main_cmd = main_cmd.subcommand(
        Command::new("completions")
            .arg(
                Arg::new("shell").short('s').long("shell").help("shell target").value_name("NAME")
                    .required(true)
                    .value_parser(["bash","elv","fish","ps1","zsh"])
            )
            .about("write completions script to stdout for the specified shell")
    );
    return main_cmd;
}
