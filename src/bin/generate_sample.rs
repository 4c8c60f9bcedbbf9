use serde::Serialize;

/// One row of the generated upload, in the viewer's column layout.
#[derive(Serialize)]
struct SampleRow {
    #[serde(rename = "Provider")]
    provider: String,
    #[serde(rename = "Specialty")]
    specialty: &'static str,
    #[serde(rename = "Licenses")]
    licenses: String,
}

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

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

const STATE_CODES: [&str; 50] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY",
];

fn main() {
    let mut rng = SimpleRng::new(42);

    let specialties = [
        "Cardiology",
        "Neurology",
        "Psychiatry",
        "Pulmonology",
        "Infectious Disease",
        "Endocrinology",
    ];
    let surnames = [
        "Adams", "Baker", "Chen", "Diaz", "Evans", "Fischer", "Garcia", "Hughes", "Ito",
        "Jensen", "Khan", "Lopez", "Moreau", "Nguyen",
    ];

    let output_path = "sample_providers.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    let mut rows = 0;
    for (i, surname) in surnames.iter().enumerate() {
        let specialty = specialties[rng.below(specialties.len())];

        // Every fifth provider has no licenses on file yet.
        let licenses = if i % 5 == 4 {
            String::new()
        } else {
            let mut codes: Vec<&str> = (0..1 + rng.below(6))
                .map(|_| STATE_CODES[rng.below(STATE_CODES.len())])
                .collect();
            codes.dedup();
            if i == 6 {
                // A territory exercises the unknown-code path.
                codes.push("PR");
            }
            codes.join(", ")
        };

        writer
            .serialize(SampleRow {
                provider: format!("Dr. {surname}"),
                specialty,
                licenses,
            })
            .expect("Failed to write row");
        rows += 1;
    }
    writer.flush().expect("Failed to flush output");

    println!("Wrote {rows} providers to {output_path}");
}
