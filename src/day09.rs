use anyhow::Result;

use crate::error::ParseError;

/// A run of blocks: a file when `id` is set, free space otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Span {start: usize, len: usize, id: Option<usize>}

fn disk_map(input: &str) -> Result<Vec<Span>, ParseError> {
    let mut spans = vec![];
    let mut start = 0;
    for (ix, &digit) in input.trim().as_bytes().iter().enumerate() {
        if !digit.is_ascii_digit() {return Err(ParseError::unexpected(digit, 0, ix))}
        let len = (digit - b'0') as usize;
        let id = (ix % 2 == 0).then_some(ix / 2);
        spans.push(Span {start, len, id});
        start += len;
    }
    Ok(spans)
}

fn blocks(spans: &[Span]) -> Vec<Option<usize>> {
    spans.iter().flat_map(|span| std::iter::repeat(span.id).take(span.len)).collect()
}

fn compact_blocks(blocks: &mut [Option<usize>]) {
    let (mut free, mut file) = (0, blocks.len());
    loop {
        while free < blocks.len() && blocks[free].is_some() {free += 1}
        while file > 0 && blocks[file - 1].is_none() {file -= 1}
        if file == 0 || free >= file - 1 {break}
        blocks.swap(free, file - 1);
    }
}

/// Moves each file once, highest id first, into the leftmost gap that fits it.
fn compact_files(spans: &[Span]) -> Vec<Span> {
    let mut gaps: Vec<Span> = spans.iter().filter(|span| span.id.is_none()).copied().collect();
    let mut files: Vec<Span> = spans.iter().filter(|span| span.id.is_some()).copied().collect();
    for file in files.iter_mut().rev() {
        let Some(gap) = gaps.iter_mut()
            .take_while(|gap| gap.start < file.start)
            .find(|gap| gap.len >= file.len) else {continue};
        file.start = gap.start;
        gap.start += file.len;
        gap.len -= file.len;
    }
    files
}

fn checksum(blocks: impl IntoIterator<Item = (usize, usize)>) -> usize {
    blocks.into_iter().map(|(pos, id)| pos * id).sum()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let spans = disk_map(input)?;
    let sum = if part == 1 {
        let mut blocks = blocks(&spans);
        compact_blocks(&mut blocks);
        checksum(blocks.into_iter().enumerate().filter_map(|(pos, id)| Some((pos, id?))))
    } else {
        checksum(compact_files(&spans).into_iter().flat_map(|file|
            (file.start .. file.start + file.len).map(move |pos| (pos, file.id.unwrap_or(0)))
        ))
    };
    Ok(sum.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "2333133121414131402\n";

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "1928");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "2858");
    }

    #[test]
    fn block_compaction() {
        let mut disk = blocks(&disk_map("12345").unwrap());
        compact_blocks(&mut disk);
        let shown = disk.iter().map(|id| id.map_or('.', |id| (b'0' + id as u8) as char)).collect::<String>();
        assert_eq!(shown, "022111222......");
    }

    #[test]
    fn files_only_move_left() {
        let files = compact_files(&disk_map("1313").unwrap());
        assert_eq!(files[1], Span {start: 1, len: 1, id: Some(1)});
        let files = compact_files(&disk_map("31233").unwrap());
        assert_eq!(files[1], Span {start: 4, len: 2, id: Some(1)});
    }

    #[test]
    fn rejects_non_digits() {
        assert!(solve(1, "12a4").is_err());
    }
}
