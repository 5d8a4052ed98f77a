use anyhow::{bail, Context};
use tracing::info;
use tracing_subscriber::EnvFilter;
use type_unify::{parser::TypeParser, unification};

const USAGE: &str = "usage: type-unify [--raw] LEFT RIGHT [LEFT RIGHT ...]";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let mut raw = false;
    let mut terms = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--raw" => raw = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ => terms.push(arg),
        }
    }
    if terms.is_empty() || terms.len() % 2 != 0 {
        bail!("expected pairs of type terms\n{USAGE}");
    }

    let mut parser = TypeParser::new();
    let mut pairs = Vec::new();
    for pair in terms.chunks(2) {
        let left = parser.parse(&pair[0]).with_context(|| format!("parsing '{}'", pair[0]))?;
        let right = parser.parse(&pair[1]).with_context(|| format!("parsing '{}'", pair[1]))?;
        println!("unifying {left} with {right}");
        pairs.push((left, right));
    }

    info!(pairs = pairs.len(), raw, "unifying");
    let subst = unification::unify(pairs).context("unification failed")?;
    let subst = if raw { subst } else { subst.resolve() };
    println!("{subst}");
    Ok(())
}
