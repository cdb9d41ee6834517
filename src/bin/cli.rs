use miette::Result;

fn main() -> Result<()> {
    taskdesk::cli::run()
}
