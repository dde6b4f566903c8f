use crate::CLAP_STYLING;
use clap::arg;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("redirex")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("redirex")
        .about(
            "Reads sitemap.xml from the current directory and writes Django redirect rules to \
            django_redirects.txt",
        )
        .styles(CLAP_STYLING)
        .arg(
            arg!(-v --"verbose" "Log extraction and file activity to stderr")
                .required(false),
        )
}
