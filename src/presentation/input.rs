/// プレゼンテーション層: ユーザー入力処理
///
/// stdin からライブラリIDと AccessKey を受け取り、
/// コマンド層で使う `LoginCredentials` に変換します。
use crate::commands::login::LoginCredentials;
use anyhow::{Context, Result, bail};
use std::io::{self, BufRead, Write};

/// 対話的に認証情報を取得
pub fn read_credentials_interactive() -> Result<LoginCredentials> {
    eprintln!("Logging in to Bunny Stream...");
    eprintln!();
    eprintln!("Please enter your Stream library ID and API key.");
    eprintln!("You can find them under Stream > your library > API in the bunny.net dashboard.");
    eprintln!();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    eprint!("Library ID: ");
    io::stderr().flush()?;
    let library_id = read_line(&mut input, "Library ID")?;

    eprint!("API Key: ");
    io::stderr().flush()?;
    let access_key = read_line(&mut input, "API Key")?;

    Ok(LoginCredentials {
        library_id,
        access_key,
    })
}

/// stdin からパイプで認証情報を取得（2行形式）
///
/// 形式:
///   1行目: Library ID
///   2行目: API Key
pub fn read_credentials_from_stdin() -> Result<LoginCredentials> {
    let stdin = io::stdin();
    read_credentials_from(&mut stdin.lock())
}

fn read_credentials_from(input: &mut impl BufRead) -> Result<LoginCredentials> {
    let library_id = read_line(input, "Library ID")?;
    let access_key = read_line(input, "API Key")?;

    Ok(LoginCredentials {
        library_id,
        access_key,
    })
}

/// 1行読み込み、前後の空白を除いて返す（空ならエラー）
fn read_line(input: &mut impl BufRead, field: &str) -> Result<String> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .with_context(|| format!("Failed to read {} from input", field))?;

    let value = line.trim().to_string();
    if value.is_empty() {
        bail!("{} cannot be empty. Please provide a valid {}.", field, field);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_credentials_two_lines() {
        let mut input = Cursor::new("12345\n  my-api-key  \n");
        let credentials = read_credentials_from(&mut input).unwrap();
        assert_eq!(credentials.library_id, "12345");
        assert_eq!(credentials.access_key, "my-api-key");
    }

    #[test]
    fn test_empty_key_is_rejected() {
        let mut input = Cursor::new("12345\n\n");
        let err = read_credentials_from(&mut input).unwrap_err();
        assert!(err.to_string().contains("API Key cannot be empty"));
    }
}
