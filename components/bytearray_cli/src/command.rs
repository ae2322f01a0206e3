//! The shell's line-oriented command language.
//!
//! A script is a sequence of commands separated by newlines or `;`. `#`
//! starts a comment that runs to the end of the line. Text literals are
//! double-quoted, may contain `;` and `#`, and understand the escapes
//! `\n`, `\t`, `\r`, `\0`, `\\`, `\"` and `\xNN`.
//!
//! ```text
//! new
//! append "AB\xff"        # text, any bytes
//! append blob 0a0b       # immutable byte blob
//! append_bytearray self  # copy of the current array
//! get 0; get append      # byte read, capability lookup
//! set 0 255
//! len; show; hex; stats; methods; release
//! ```

use crate::error::{CliError, CliResult};
use std::iter::Peekable;
use std::str::Chars;

/// An argument to a command, turned into a host value at execution time
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Quoted text, escapes already resolved
    Text(Vec<u8>),
    /// `blob <hex>`: an immutable byte blob
    Blob(Vec<u8>),
    /// `opaque <type>`: a foreign value that offers no bytes
    Opaque(String),
    /// `self`: the current byte array
    SelfRef,
    /// `nil`
    Nil,
    /// `true` or `false`
    Boolean(bool),
    /// Integer literal
    Integer(i64),
    /// Float literal
    Number(f64),
    /// Any other bare word, passed as a string
    Name(String),
}

/// One shell command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Replace the current array with a new, empty one
    New,
    /// `b:append(operand)`
    Append(Operand),
    /// `b:append_bytearray(operand)`
    AppendByteArray(Operand),
    /// `b .. operand`
    Concat(Operand),
    /// `b[key]`
    Get(Operand),
    /// `b[key] = value`
    Set(Operand, Operand),
    /// `#b`
    Len,
    /// `tostring(b)`
    Show,
    /// The bytes as lowercase hex
    Hex,
    /// Length, capacity and growth counters as JSON
    Stats,
    /// Names in the capability table
    Methods,
    /// `b:release()`
    Release,
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Word(String),
    Text(Vec<u8>),
}

/// Parse a whole script. Blank lines and comments produce no command.
///
/// # Errors
///
/// Returns `CliError::ParseError` for the first malformed command; nothing
/// is returned for the commands before it.
///
/// # Example
///
/// ```
/// use bytearray_cli::{Command, Operand};
/// use bytearray_cli::command::parse_script;
///
/// let commands = parse_script("append \"hi\"; len # length").unwrap();
/// assert_eq!(
///     commands,
///     vec![Command::Append(Operand::Text(b"hi".to_vec())), Command::Len]
/// );
/// ```
pub fn parse_script(source: &str) -> CliResult<Vec<Command>> {
    split_commands(source)?
        .iter()
        .map(|tokens| parse_command(tokens))
        .collect()
}

fn parse_error(message: impl Into<String>) -> CliError {
    CliError::ParseError(message.into())
}

fn split_commands(source: &str) -> CliResult<Vec<Vec<Token>>> {
    let mut commands = Vec::new();
    let mut tokens = Vec::new();
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\n' | ';' => {
                if !tokens.is_empty() {
                    commands.push(std::mem::take(&mut tokens));
                }
            }
            '#' => {
                while chars.next_if(|&c| c != '\n').is_some() {}
            }
            '"' => tokens.push(Token::Text(read_text(&mut chars)?)),
            c if c.is_whitespace() => {}
            c => {
                let mut word = String::from(c);
                while let Some(c) =
                    chars.next_if(|&c| !c.is_whitespace() && !matches!(c, ';' | '#' | '"'))
                {
                    word.push(c);
                }
                tokens.push(Token::Word(word));
            }
        }
    }
    if !tokens.is_empty() {
        commands.push(tokens);
    }
    Ok(commands)
}

/// Read a text literal after its opening quote
fn read_text(chars: &mut Peekable<Chars<'_>>) -> CliResult<Vec<u8>> {
    let mut text = Vec::new();
    loop {
        let c = chars
            .next()
            .ok_or_else(|| parse_error("unterminated text literal"))?;
        match c {
            '"' => return Ok(text),
            '\\' => {
                let escaped = chars
                    .next()
                    .ok_or_else(|| parse_error("unterminated text literal"))?;
                let byte = match escaped {
                    'n' => b'\n',
                    't' => b'\t',
                    'r' => b'\r',
                    '0' => 0,
                    '\\' => b'\\',
                    '"' => b'"',
                    'x' => read_hex_escape(chars)?,
                    other => return Err(parse_error(format!("unknown escape '\\{}'", other))),
                };
                text.push(byte);
            }
            c => {
                let mut buf = [0u8; 4];
                text.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
        }
    }
}

fn read_hex_escape(chars: &mut Peekable<Chars<'_>>) -> CliResult<u8> {
    let high = chars.next().and_then(|c| c.to_digit(16));
    let low = chars.next().and_then(|c| c.to_digit(16));
    match (high, low) {
        // Two hex digits never exceed 0xff
        (Some(high), Some(low)) => Ok((high * 16 + low) as u8),
        _ => Err(parse_error("\\x must be followed by two hex digits")),
    }
}

fn parse_command(tokens: &[Token]) -> CliResult<Command> {
    let (name, args) = match tokens.split_first() {
        Some((Token::Word(name), args)) => (name.as_str(), args),
        Some((Token::Text(_), _)) => {
            return Err(parse_error("expected a command, found a text literal"))
        }
        None => return Err(parse_error("empty command")),
    };

    let command = match name {
        "new" => no_operands(name, args, Command::New)?,
        "len" => no_operands(name, args, Command::Len)?,
        "show" => no_operands(name, args, Command::Show)?,
        "hex" => no_operands(name, args, Command::Hex)?,
        "stats" => no_operands(name, args, Command::Stats)?,
        "methods" => no_operands(name, args, Command::Methods)?,
        "release" => no_operands(name, args, Command::Release)?,
        "append" => Command::Append(one_operand(name, args)?),
        "append_bytearray" => Command::AppendByteArray(one_operand(name, args)?),
        "concat" => Command::Concat(one_operand(name, args)?),
        "get" => Command::Get(one_operand(name, args)?),
        "set" => {
            let (key, rest) = parse_operand(name, args)?;
            let (value, rest) = parse_operand(name, rest)?;
            expect_end(name, rest)?;
            Command::Set(key, value)
        }
        other => return Err(parse_error(format!("unknown command '{}'", other))),
    };
    Ok(command)
}

fn no_operands(name: &str, args: &[Token], command: Command) -> CliResult<Command> {
    expect_end(name, args)?;
    Ok(command)
}

fn one_operand(name: &str, args: &[Token]) -> CliResult<Operand> {
    let (operand, rest) = parse_operand(name, args)?;
    expect_end(name, rest)?;
    Ok(operand)
}

fn expect_end(name: &str, rest: &[Token]) -> CliResult<()> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(parse_error(format!("too many operands for '{}'", name)))
    }
}

fn parse_operand<'t>(name: &str, args: &'t [Token]) -> CliResult<(Operand, &'t [Token])> {
    let (first, rest) = args
        .split_first()
        .ok_or_else(|| parse_error(format!("missing operand for '{}'", name)))?;
    let word = match first {
        Token::Text(bytes) => return Ok((Operand::Text(bytes.clone()), rest)),
        Token::Word(word) => word.as_str(),
    };

    let operand = match word {
        "blob" => {
            let (digits, rest) = word_after(word, rest)?;
            let bytes = hex::decode(digits)
                .map_err(|e| parse_error(format!("invalid blob '{}': {}", digits, e)))?;
            return Ok((Operand::Blob(bytes), rest));
        }
        "opaque" => {
            let (type_name, rest) = word_after(word, rest)?;
            return Ok((Operand::Opaque(type_name.to_string()), rest));
        }
        "self" => Operand::SelfRef,
        "nil" => Operand::Nil,
        "true" => Operand::Boolean(true),
        "false" => Operand::Boolean(false),
        _ => parse_scalar(word),
    };
    Ok((operand, rest))
}

fn word_after<'t>(keyword: &str, rest: &'t [Token]) -> CliResult<(&'t str, &'t [Token])> {
    match rest.split_first() {
        Some((Token::Word(word), rest)) => Ok((word.as_str(), rest)),
        _ => Err(parse_error(format!("'{}' expects a word", keyword))),
    }
}

fn parse_scalar(word: &str) -> Operand {
    if let Ok(integer) = word.parse::<i64>() {
        Operand::Integer(integer)
    } else if let Ok(number) = word.parse::<f64>() {
        Operand::Number(number)
    } else {
        Operand::Name(word.to_string())
    }
}
