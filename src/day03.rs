use anyhow::Result;
use regex::Regex;

#[derive(Debug, PartialEq, Eq)]
enum Instr {Mul(u64, u64), Do, Dont}

fn scan(memory: &str) -> Result<Vec<Instr>> {
    Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)")?
        .captures_iter(memory)
        .map(|m| -> Result<Instr> {Ok(match &m[0] {
            "do()" => Instr::Do,
            "don't()" => Instr::Dont,
            _ => Instr::Mul(m[1].parse()?, m[2].parse()?),
        })})
        .collect()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let mut enabled = true;
    Ok(scan(input)?.into_iter().map(|instr| match instr {
        Instr::Do => {enabled = true; 0},
        Instr::Dont => {if part == 2 {enabled = false}; 0},
        Instr::Mul(x, y) => if enabled {x * y} else {0},
    }).sum::<u64>().to_string())
}
