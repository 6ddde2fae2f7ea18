use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const SEASONS: [u8; 4] = [22, 23, 24, 25];
const PITCH_CODES: [&str; 9] = ["4S", "CT", "2S", "CH", "SL", "CB", "SPLT", "KCB", "XX"];

const FIRST_NAMES: [&str; 12] = [
    "Alex", "Ben", "Carlos", "Dylan", "Eli", "Felix", "Gabe", "Hector", "Ivan", "Jose", "Kyle",
    "Luis",
];
const LAST_NAMES: [&str; 10] = [
    "Alvarez", "Brooks", "Castro", "Diaz", "Evans", "Flores", "Garcia", "Hill", "Iglesias",
    "Jensen",
];
const TEAMS: [&str; 8] = ["NYY", "BOS", "LAD", "SEA", "HOU", "ATL", "CHC", "SDP"];

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

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

struct Player {
    id: u32,
    name: String,
    team: &'static str,
    age: u32,
}

/// Players of one free-agent class. Ids overlap between neighbouring
/// seasons so some names show up in more than one class.
fn roster(rng: &mut SimpleRng, season: u8, offset: u32, count: u32) -> Vec<Player> {
    let start = offset + u32::from(season - 22) * (count / 2);
    (start..start + count)
        .map(|id| {
            let first = FIRST_NAMES[id as usize % FIRST_NAMES.len()];
            let last = LAST_NAMES[(id as usize / FIRST_NAMES.len()) % LAST_NAMES.len()];
            Player {
                id,
                name: format!("{first} {last}"),
                team: rng.pick(&TEAMS),
                age: 26 + (rng.next_u64() % 10) as u32,
            }
        })
        .collect()
}

fn money(dollars: f64) -> String {
    let whole = (dollars / 100_000.0).round() as u64 * 100_000;
    let digits = whole.to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("${out}")
}

fn write_csv(path: &Path, header: &[String], rows: &[Vec<String>]) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn hitters(rng: &mut SimpleRng, dir: &Path, season: u8) -> Result<()> {
    let players = roster(rng, season, 0, 24);

    let perf: Vec<Vec<String>> = players
        .iter()
        .map(|p| {
            let pa = 250 + rng.next_u64() % 450;
            vec![
                p.id.to_string(),
                p.name.clone(),
                p.team.to_string(),
                p.age.to_string(),
                pa.to_string(),
                (rng.next_u64() % 40).to_string(),
                format!("{:.3}", rng.range(0.210, 0.320)),
                format!("{:.3}", rng.range(0.280, 0.400)),
                format!("{:.3}", rng.range(0.340, 0.560)),
                format!("{:.0}", rng.range(70.0, 160.0)),
                format!("{:.1}", rng.range(-0.5, 7.5)),
            ]
        })
        .collect();
    write_csv(
        &dir.join(format!("hitters_{season}.csv")),
        &strings(&[
            "playerid", "Name", "Team", "Age", "PA", "HR", "AVG", "OBP", "SLG", "wRC+", "WAR",
        ]),
        &perf,
    )?;

    contracts(rng, &dir.join(format!("hitters_{season}_contract.csv")), &players)
}

fn pitchers(rng: &mut SimpleRng, dir: &Path, season: u8) -> Result<()> {
    let players = roster(rng, season, 500, 20);

    let perf: Vec<Vec<String>> = players
        .iter()
        .map(|p| {
            vec![
                p.id.to_string(),
                p.name.clone(),
                p.team.to_string(),
                p.age.to_string(),
                format!("{:.1}", rng.range(40.0, 200.0)),
                format!("{:.2}", rng.range(2.20, 5.50)),
                format!("{:.2}", rng.range(2.50, 5.20)),
                format!("{:.2}", rng.range(6.0, 12.5)),
                format!("{:.1}", rng.range(-0.3, 6.0)),
            ]
        })
        .collect();
    write_csv(
        &dir.join(format!("pitchers_{season}.csv")),
        &strings(&["playerid", "Name", "Team", "Age", "IP", "ERA", "FIP", "K/9", "WAR"]),
        &perf,
    )?;

    contracts(rng, &dir.join(format!("pitchers_{season}_contract.csv")), &players)?;
    pitch_mix(rng, &dir.join(format!("pitchers_{season}_pitches.csv")), &players)
}

fn contracts(rng: &mut SimpleRng, path: &Path, players: &[Player]) -> Result<()> {
    let rows: Vec<Vec<String>> = players
        .iter()
        .map(|p| {
            let years = 1 + rng.next_u64() % 6;
            let aav = rng.range(1_000_000.0, 32_000_000.0);
            vec![
                p.id.to_string(),
                p.name.clone(),
                p.age.to_string(),
                years.to_string(),
                money(aav * years as f64),
                money(aav),
            ]
        })
        .collect();
    write_csv(
        path,
        &strings(&["playerid", "Name", "Age", "Years", "Total", "AAV"]),
        &rows,
    )
}

fn pitch_mix(rng: &mut SimpleRng, path: &Path, players: &[Player]) -> Result<()> {
    let mut header = strings(&["playerid", "Name"]);
    for code in PITCH_CODES {
        header.push(format!("{code}%"));
        header.push(format!("v{code}"));
        header.push(format!("w{code}"));
        header.push(format!("Stf+ {code}"));
    }

    let rows: Vec<Vec<String>> = players
        .iter()
        .map(|p| {
            // Each pitcher throws a random subset of pitch types.
            let thrown: Vec<bool> = PITCH_CODES
                .iter()
                .enumerate()
                .map(|(i, _)| i == 0 || rng.next_f64() < 0.45)
                .collect();
            let weights: Vec<f64> = thrown
                .iter()
                .map(|&t| if t { rng.range(5.0, 50.0) } else { 0.0 })
                .collect();
            let total: f64 = weights.iter().sum();

            let mut row = vec![p.id.to_string(), p.name.clone()];
            for (i, &w) in weights.iter().enumerate() {
                if thrown[i] {
                    row.push(format!("{:.1}%", 100.0 * w / total));
                    row.push(format!("{:.1}", rng.range(78.0, 99.0)));
                    row.push(format!("{:.1}", rng.range(-8.0, 12.0)));
                    row.push(format!("{:.0}", rng.range(70.0, 140.0)));
                } else {
                    row.extend(std::iter::repeat(String::new()).take(4));
                }
            }
            row
        })
        .collect();
    write_csv(path, &header, &rows)
}

fn main() -> Result<()> {
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_data"));
    fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    let mut rng = SimpleRng::new(42);
    for season in SEASONS {
        hitters(&mut rng, &dir, season)?;
        pitchers(&mut rng, &dir, season)?;
    }

    println!(
        "Wrote {} files for seasons 20{}-20{} to {}",
        SEASONS.len() * 5,
        SEASONS[0],
        SEASONS[SEASONS.len() - 1],
        dir.display()
    );
    Ok(())
}
