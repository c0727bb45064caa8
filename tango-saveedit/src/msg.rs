//! Decoding of the games' scripted text.
//!
//! Text is a byte stream where most bytes are glyph indexes into a per-language charset and the rest are control
//! codes. A [`Parser`] matches the longest known prefix at each position and turns the stream into [`Chunk`]s.

use crate::{bytes, Error};
use itertools::Itertools;

/// A run of decoded text, or a control code the caller asked to see.
#[derive(Debug, PartialEq)]
pub enum Chunk<Command> {
    Text(String),
    Command(Command),
}

enum Rule<Command> {
    PushText(String),
    ReadCommand(fn(&[u8]) -> Option<(Command, &[u8])>),
    Skip(usize),
    Error,
    Stop,
}

/// A fixed-size control code body, read straight out of the stream after its opcode.
pub trait CommandBody<Command>
where
    Self: bytemuck::AnyBitPattern,
{
    fn into_wrapped(self) -> Command;
}

/// Collects prefix rules for a [`Parser`]. Adding a rule for an existing prefix replaces it.
pub struct ParserBuilder<Command> {
    rules: patricia_tree::PatriciaMap<Rule<Command>>,
    fallthrough_rule: Rule<Command>,
}

/// What to do with a byte that starts no known rule.
pub enum FallthroughBehavior {
    /// Drop the byte.
    Skip,
    Stop,
    Error,
    /// Emit a placeholder string.
    Text(String),
}

impl<Command> ParserBuilder<Command> {
    pub fn with_fallthrough_rule(mut self, behavior: FallthroughBehavior) -> Self {
        self.fallthrough_rule = match behavior {
            FallthroughBehavior::Skip => Rule::Skip(0),
            FallthroughBehavior::Stop => Rule::Stop,
            FallthroughBehavior::Error => Rule::Error,
            FallthroughBehavior::Text(s) => Rule::PushText(s),
        };
        self
    }

    fn add_rule(mut self, pat: &[u8], rule: Rule<Command>) -> Self {
        self.rules.insert(Box::from(pat), rule);
        self
    }

    pub fn add_stop_rule(self, pat: &[u8]) -> Self {
        self.add_rule(pat, Rule::Stop)
    }

    /// Drops `pat` and the `n` bytes after it.
    pub fn add_skip_rule(self, pat: &[u8], n: usize) -> Self {
        self.add_rule(pat, Rule::Skip(n))
    }

    /// Reads a `T` after `pat` and emits it as a command chunk. A body cut short by the end of the buffer is an error.
    pub fn add_command_rule<T>(self, pat: &[u8]) -> Self
    where
        T: CommandBody<Command>,
    {
        self.add_rule(
            pat,
            Rule::ReadCommand(|buf| {
                let len = std::mem::size_of::<T>();
                if buf.len() < len {
                    return None;
                }
                let (params, rest) = buf.split_at(len);
                let body = bytemuck::pod_read_unaligned::<T>(params);
                Some((body.into_wrapped(), rest))
            }),
        )
    }

    pub fn add_text_rule(self, pat: &[u8], s: &str) -> Self {
        self.add_rule(pat, Rule::PushText(s.to_string()))
    }

    /// Maps each charset index to its glyph. Indexes at or above `extension_op_base` are reached through a two byte
    /// sequence: the extension op (offset by the page) followed by the index within the page.
    pub fn add_charset_rules(self, charset: &[&str], extension_op_base: u8) -> Self {
        let mut this = self;
        for (i, c) in charset.iter().enumerate() {
            if i < extension_op_base as usize {
                this = this.add_text_rule(&[i as u8][..], c);
            } else {
                let offset = i - extension_op_base as usize;
                this = this.add_text_rule(
                    &[extension_op_base + (offset / 0x100) as u8, (offset % 0x100) as u8][..],
                    c,
                );
            }
        }
        this
    }

    pub fn build(self) -> Parser<Command> {
        Parser {
            rules: self.rules,
            fallthrough_rule: self.fallthrough_rule,
        }
    }
}

/// A prefix tree of byte patterns to rules.
pub struct Parser<Command> {
    rules: patricia_tree::PatriciaMap<Rule<Command>>,
    fallthrough_rule: Rule<Command>,
}

fn coalesce<Command>(chunks: Vec<Chunk<Command>>) -> Vec<Chunk<Command>> {
    chunks
        .into_iter()
        .group_by(|chunk| matches!(chunk, Chunk::Text(_)))
        .into_iter()
        .flat_map(|(is_text, g)| {
            if !is_text {
                g.into_iter().collect::<Vec<_>>()
            } else {
                vec![Chunk::Text(
                    g.into_iter()
                        .map(|chunk| match chunk {
                            Chunk::Text(t) => t,
                            Chunk::Command { .. } => unreachable!(),
                        })
                        .collect::<String>(),
                )]
            }
        })
        .collect::<Vec<_>>()
}

impl<Command> Parser<Command> {
    pub fn builder() -> ParserBuilder<Command> {
        ParserBuilder {
            rules: patricia_tree::PatriciaMap::new(),
            fallthrough_rule: Rule::Skip(0),
        }
    }

    /// Decodes `buf` until a stop rule or the end of the buffer. Adjacent text is merged into a single chunk.
    pub fn parse(&self, mut buf: &[u8]) -> Result<Vec<Chunk<Command>>, Error> {
        let mut chunks = vec![];

        while !buf.is_empty() {
            let (prefix, rule) = self
                .rules
                .get_longest_common_prefix(buf)
                .unwrap_or_else(|| (&buf[..1], &self.fallthrough_rule));

            buf = &buf[prefix.len()..];
            chunks.push(match rule {
                Rule::PushText(t) => Chunk::Text(t.clone()),
                Rule::ReadCommand(read) => {
                    let (wrapped, rest) = read(buf).ok_or_else(|| {
                        Error::format(format!("not enough bytes for command, {} remaining", buf.len()))
                    })?;
                    buf = rest;
                    Chunk::Command(wrapped)
                }
                Rule::Stop => {
                    break;
                }
                Rule::Skip(n) => {
                    buf = buf
                        .get(*n..)
                        .ok_or_else(|| Error::format(format!("not enough bytes to skip {}", n)))?;
                    continue;
                }
                Rule::Error => {
                    return Err(Error::format(format!("could not parse: {:02x?}", prefix)));
                }
            });
        }

        Ok(coalesce(chunks))
    }
}

/// The commands the string decoders care about. Anything else is skipped by the per-game rules.
#[derive(Debug, PartialEq)]
pub enum Command {
    PrintVar(PrintVarCommand),
}

#[repr(packed, C)]
#[derive(bytemuck::AnyBitPattern, Clone, Copy, c2rust_bitfields::BitfieldStruct, Debug, PartialEq)]
pub struct PrintVarCommand {
    pub kind: u8,
    #[bitfield(name = "min_length", ty = "u8", bits = "2..=5")]
    #[bitfield(name = "pad_zeros", ty = "bool", bits = "6..=6")]
    #[bitfield(name = "pad_left", ty = "bool", bits = "7..=7")]
    pub params: [u8; 1],
    pub buffer: u8,
}
const _: () = assert!(std::mem::size_of::<PrintVarCommand>() == 0x3);

impl CommandBody<Command> for PrintVarCommand {
    fn into_wrapped(self) -> Command {
        Command::PrintVar(self)
    }
}

impl PrintVarCommand {
    /// Formats `value` the way the game would print it into this placeholder.
    pub fn format(&self, value: u32) -> String {
        let width = self.min_length() as usize;
        match (self.pad_zeros(), self.pad_left()) {
            (true, _) => format!("{:0>width$}", value, width = width),
            (false, true) => format!("{:>width$}", value, width = width),
            (false, false) => format!("{}", value),
        }
    }
}

/// Locates entry `i` of a script: a table of u16 offsets relative to the start of `buf`.
pub fn get_entry(buf: &[u8], i: usize) -> Result<&[u8], Error> {
    let offset = bytes::read_u16(buf, i * 2)? as usize;
    let next_offset = bytes::read_u16(buf, (i + 1) * 2)? as usize;

    let next_offset = if next_offset < offset || next_offset > buf.len() {
        buf.len()
    } else {
        next_offset
    };

    buf.get(offset..next_offset).ok_or(Error::OutOfRange {
        offset,
        len: next_offset.saturating_sub(offset),
        size: buf.len(),
    })
}

/// Glyphs that charsets decode into the private use area, and the tags they stand for.
pub const PRIVATE_USE_TAGS: &[(char, &str)] = &[
    ('\u{e000}', "SP"),
    ('\u{e001}', "DS"),
    ('\u{e002}', "EX"),
    ('\u{e003}', "V2"),
    ('\u{e004}', "V3"),
    ('\u{e005}', "V4"),
    ('\u{e006}', "V5"),
    ('\u{e007}', "RV"),
    ('\u{e008}', "BX"),
    ('\u{e009}', "FZ"),
];

pub fn remap_private_use(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match PRIVATE_USE_TAGS.iter().find(|(pc, _)| *pc == c) {
            Some((_, tag)) => out.push_str(tag),
            None => out.push(c),
        }
    }
    out
}

/// Flattens line breaks into spaces. A line ending in a hyphen is joined without a space.
pub fn simplify_newlines(s: &str) -> String {
    s.replace("-\n", "-").replace('\n', " ")
}

/// Joins parsed chunks into a string, rendering commands through `render`.
pub fn render<Command>(chunks: Vec<Chunk<Command>>, mut render: impl FnMut(&Command) -> String) -> String {
    remap_private_use(
        &chunks
            .into_iter()
            .map(|chunk| match chunk {
                Chunk::Text(s) => s,
                Chunk::Command(cmd) => render(&cmd),
            })
            .collect::<String>(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHARSET: &[&str] = &[" ", "A", "B", "C", "-", "\u{e000}", "x", "y"];

    fn parser() -> Parser<Command> {
        Parser::builder()
            .with_fallthrough_rule(FallthroughBehavior::Stop)
            .add_stop_rule(b"\xe6")
            .add_charset_rules(CHARSET, 0x06)
            .add_text_rule(b"\xe9", "\n")
            .add_command_rule::<PrintVarCommand>(b"\xfa")
            .add_skip_rule(b"\xe7", 1)
            .build()
    }

    #[test]
    fn test_parse_text_and_extension() {
        let chunks = parser().parse(b"\x01\x02\x06\x00\x06\x01\xe6\x01").unwrap();
        assert_eq!(chunks, vec![Chunk::Text("ABxy".to_string())]);
    }

    #[test]
    fn test_parse_skip_and_command() {
        let chunks = parser().parse(b"\x01\xe7\x55\x02\xfa\x00\x00\x01\x03").unwrap();
        assert_eq!(
            chunks,
            vec![
                Chunk::Text("AB".to_string()),
                Chunk::Command(Command::PrintVar(PrintVarCommand {
                    kind: 0,
                    params: [0],
                    buffer: 1
                })),
                Chunk::Text("C".to_string()),
            ]
        );
    }

    #[test]
    fn test_unknown_byte_stops() {
        let chunks = parser().parse(b"\x01\xd0\x02").unwrap();
        assert_eq!(chunks, vec![Chunk::Text("A".to_string())]);
    }

    #[test]
    fn test_truncated_command() {
        assert!(matches!(parser().parse(b"\x01\xfa\x00"), Err(Error::Format(_))));
        assert!(matches!(parser().parse(b"\xe7"), Err(Error::Format(_))));
    }

    #[test]
    fn test_get_entry() {
        // Three entries, the last of which runs to the end of the buffer.
        let buf = b"\x08\x00\x0a\x00\x0b\x00\xff\xff\x01\x02\x03\x04\x05";
        assert_eq!(get_entry(buf, 0).unwrap(), b"\x01\x02");
        assert_eq!(get_entry(buf, 1).unwrap(), b"\x03");
        assert_eq!(get_entry(buf, 2).unwrap(), b"\x04\x05");
        assert!(get_entry(buf, 100).is_err());
    }

    #[test]
    fn test_simplify_newlines() {
        assert_eq!(simplify_newlines("Long-\nSword"), "Long-Sword");
        assert_eq!(simplify_newlines("Wide\nSword"), "Wide Sword");
        assert_eq!(simplify_newlines("a\nb-\nc\n"), "a b-c ");
    }

    #[test]
    fn test_remap_private_use() {
        let chunks = parser().parse(b"\x05\x01").unwrap();
        assert_eq!(render(chunks, |_| String::new()), "SPA");
        assert_eq!(remap_private_use("Cannon\u{e007}\u{e009}"), "CannonRVFZ");
    }

    #[test]
    fn test_print_var_format() {
        let mut cmd = PrintVarCommand {
            kind: 3,
            params: [0],
            buffer: 1,
        };
        assert_eq!(cmd.format(7), "7");
        cmd.set_min_length(3);
        cmd.set_pad_zeros(true);
        assert_eq!(cmd.format(7), "007");
        cmd.set_pad_zeros(false);
        cmd.set_pad_left(true);
        assert_eq!(cmd.format(7), "  7");
    }
}
