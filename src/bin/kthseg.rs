use anyhow::Context;
use kthseg::batch::parse_input;
use kthseg::options::Options;
use std::io::{BufWriter, Read, Write};

fn main() -> anyhow::Result<()> {
    if std::env::var("KTHSEG_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("KTHSEG_LOG")
            .write_style("KTHSEG_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let options = match Options::parse_from_args(std::env::args_os().skip(1)) {
        Ok(options) => options,
        Err(e) => e.exit(),
    };
    log::debug!("kthseg options: {:?}", options);

    let input = match &options.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .lock()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let batch = parse_input::<i64>(&input)?;
    let mut out = BufWriter::new(std::io::stdout().lock());
    let failed = batch.run(&mut out, options.keep_going)?;
    out.flush()?;

    if failed > 0 {
        anyhow::bail!("{failed} of {} queries failed", batch.queries.len());
    }
    Ok(())
}
