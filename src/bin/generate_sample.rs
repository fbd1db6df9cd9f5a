//! Write a deterministic sample upload (`sample_mentions.csv`) for
//! exercising downstream renderers by hand.

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn pick<'a>(&mut self, options: &[&'a str]) -> &'a str {
        options[(self.next_u64() % options.len() as u64) as usize]
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = SimpleRng::new(42);

    let keywords = [
        "acme merger", "grid outage", "rail tender", "battery plant",
        "price cut", "ceo change", "plant closure", "new contract",
    ];
    let units = ["Energy", "Rail", "Grid", "Mobility"];
    let competitors = ["Acme Corp", "Borealis", "Contoso", "Dyna Ltd"];
    let sources = ["Reuters", "Bloomberg", "Handelsblatt", "TechCrunch"];

    let output_path = "sample_mentions.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    writer.write_record([
        "keyword",
        "newstitle",
        "SBU",
        "Competitor",
        "publishedate",
        "source",
    ])?;

    let rows = 120;
    for i in 0..rows {
        let keyword = rng.pick(&keywords);
        let source = rng.pick(&sources);

        // One or two business units, zero to two competitors.
        let mut sbu = rng.pick(&units).to_string();
        if rng.next_u64() % 2 == 0 {
            sbu.push_str(", ");
            sbu.push_str(rng.pick(&units));
        }
        let mentioned = match rng.next_u64() % 3 {
            0 => String::new(),
            1 => rng.pick(&competitors).to_string(),
            _ => format!("{}, {}", rng.pick(&competitors), rng.pick(&competitors)),
        };

        // Spread publish dates over Q1 2024.
        let day = rng.next_u64() % 90;
        let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.checked_add_days(chrono::Days::new(day)))
            .context("building publish date")?;

        let title = format!("{keyword}: coverage item {i}");
        let date_text = date.to_string();
        writer.write_record([
            keyword,
            title.as_str(),
            sbu.as_str(),
            mentioned.as_str(),
            date_text.as_str(),
            source,
        ])?;
    }

    writer.flush()?;
    println!("Wrote {rows} rows to {output_path}");
    Ok(())
}
