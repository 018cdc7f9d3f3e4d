use crate::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn handle_fixture_commands(cli: &Cli) -> anyhow::Result<bool> {
    let Commands::Bits { width, seed } = &cli.command else {
        return Ok(false);
    };

    let pattern = match seed {
        Some(s) => BitPattern::generate(width.bits(), &mut StdRng::seed_from_u64(*s)),
        None => BitPattern::generate(width.bits(), &mut rand::rng()),
    };
    let report = BitPatternReport {
        width: pattern.width(),
        unsigned: pattern.unsigned_literal(),
        bytes: pattern.byte_array_literal(),
    };
    print_one(cli.json, report, |r| format!("{}\n\n{}", r.unsigned, r.bytes))?;

    Ok(true)
}
