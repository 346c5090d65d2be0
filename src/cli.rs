use crate::commands::{self, CommandResult};
use crate::presentation::input;
use anyhow::{Context, Result, bail};
use bunny_stream::ListVideosParams;

/// 解析済みのCLI引数
#[derive(Debug)]
pub struct ParsedArgs {
    /// --machine フラグ
    pub machine_output: bool,
    /// コマンド名以降の引数
    pub rest: Vec<String>,
}

/// グローバルフラグを取り出す
pub fn parse_global(args: &[String]) -> ParsedArgs {
    let mut machine_output = false;
    let rest = args
        .iter()
        .skip(1)
        .filter(|arg| {
            if arg.as_str() == "--machine" {
                machine_output = true;
                false
            } else {
                true
            }
        })
        .cloned()
        .collect();

    ParsedArgs {
        machine_output,
        rest,
    }
}

/// 引数リストから `--name value` を取り出す（複数回指定時はすべて）
fn take_option_all(args: &mut Vec<String>, name: &str) -> Result<Vec<String>> {
    let mut values = Vec::new();
    while let Some(pos) = args.iter().position(|a| a == name) {
        if pos + 1 >= args.len() {
            bail!("Option '{}' requires a value", name);
        }
        let value = args.remove(pos + 1);
        args.remove(pos);
        values.push(value);
    }
    Ok(values)
}

/// 引数リストから `--name value` を取り出す（最後の指定を使う）
fn take_option(args: &mut Vec<String>, name: &str) -> Result<Option<String>> {
    Ok(take_option_all(args, name)?.pop())
}

/// 引数リストから `--name` を取り出す
fn take_flag(args: &mut Vec<String>, name: &str) -> bool {
    let before = args.len();
    args.retain(|a| a != name);
    before != args.len()
}

/// n番目の位置引数を取得
fn positional<'a>(args: &'a [String], index: usize, what: &str) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .with_context(|| format!("Please specify {}", what))
}

fn parse_number(value: Option<String>, name: &str, default: u32) -> Result<u32> {
    match value {
        Some(v) => v
            .parse()
            .with_context(|| format!("Option '{}' expects a positive number, got '{}'", name, v)),
        None => Ok(default),
    }
}

/// list コマンドのオプションを解析
fn parse_list_params(args: &mut Vec<String>) -> Result<ListVideosParams> {
    let defaults = ListVideosParams::default();

    let mut params = ListVideosParams {
        page: parse_number(take_option(args, "--page")?, "--page", defaults.page)?,
        per_page: parse_number(
            take_option(args, "--per-page")?,
            "--per-page",
            defaults.per_page,
        )?,
        ..defaults
    };

    if let Some(sort_by) = take_option(args, "--sort-by")? {
        params = params.sort_by(sort_by);
    }
    if let Some(search) = take_option(args, "--search")? {
        params = params.search(search);
    }
    if let Some(collection) = take_option(args, "--collection")? {
        params = params.collection(collection);
    }

    Ok(params)
}

/// CLI引数を解析し、適切なコマンドにディスパッチする
///
/// # 引数
/// * `args` - `--machine` を除いた、コマンド名から始まる引数
pub async fn dispatch(args: &[String]) -> Result<CommandResult> {
    let Some(command) = args.first() else {
        return commands::help::execute().await;
    };
    let mut rest: Vec<String> = args[1..].to_vec();

    match command.as_str() {
        "login" => {
            let credentials = if take_flag(&mut rest, "--stdin") {
                input::read_credentials_from_stdin()?
            } else {
                input::read_credentials_interactive()?
            };
            commands::login::execute(credentials)
                .await
                .context("Login command failed")
        }
        "logout" => commands::logout::execute()
            .await
            .context("Logout command failed"),
        "status" => commands::status::execute()
            .await
            .context("Status command failed"),
        "list" => {
            let params = parse_list_params(&mut rest)?;
            commands::list::execute(params)
                .await
                .context("List command failed")
        }
        "show" => {
            let video_id = positional(&rest, 0, "a video ID for show command")?;
            commands::show::execute(video_id)
                .await
                .context("Show command failed")
        }
        "create" => {
            let collection = take_option(&mut rest, "--collection")?;
            let title = positional(&rest, 0, "a title for create command")?;
            commands::create::execute(title, collection.as_deref())
                .await
                .context("Create command failed")
        }
        "update" => {
            let video_id = positional(&rest, 0, "a video ID for update command")?;
            let title = positional(&rest, 1, "a title for update command")?;
            let collection = positional(&rest, 2, "a collection ID for update command")?;
            commands::update::execute(video_id, title, collection)
                .await
                .context("Update command failed")
        }
        "delete" => {
            let video_id = positional(&rest, 0, "a video ID for delete command")?;
            commands::delete::execute(video_id)
                .await
                .context("Delete command failed")
        }
        "upload" => {
            let title = take_option(&mut rest, "--title")?;
            let collection = take_option(&mut rest, "--collection")?;
            let file_path = positional(&rest, 0, "a file path for upload command")?;
            commands::upload::execute(file_path, title.as_deref(), collection.as_deref())
                .await
                .context("Upload command failed")
        }
        "upload-to" => {
            let video_id = positional(&rest, 0, "a video ID for upload-to command")?;
            let file_path = positional(&rest, 1, "a file path for upload-to command")?;
            commands::upload::execute_to_existing(video_id, file_path)
                .await
                .context("Upload command failed")
        }
        "thumbnail" => {
            let video_id = positional(&rest, 0, "a video ID for thumbnail command")?;
            let url = positional(&rest, 1, "a thumbnail URL")?;
            commands::thumbnail::execute(video_id, url)
                .await
                .context("Thumbnail command failed")
        }
        "fetch" => {
            let headers = take_option_all(&mut rest, "--header")?;
            let video_id = positional(&rest, 0, "a video ID for fetch command")?;
            let url = positional(&rest, 1, "a source URL for fetch command")?;
            commands::fetch::execute(video_id, url, &headers)
                .await
                .context("Fetch command failed")
        }
        "captions" => dispatch_captions(rest).await,
        "help" | "--help" | "-h" => commands::help::execute().await,
        _ => bail!(
            "Unknown command: '{}'. Use 'help' to see available commands.",
            command
        ),
    }
}

async fn dispatch_captions(mut rest: Vec<String>) -> Result<CommandResult> {
    let label = take_option(&mut rest, "--label")?;
    let action = positional(&rest, 0, "'add' or 'delete' for captions command")?;

    match action {
        "add" => {
            let video_id = positional(&rest, 1, "a video ID for captions add")?;
            let lang = positional(&rest, 2, "a language code for captions add")?;
            let file_path = positional(&rest, 3, "a captions file for captions add")?;
            commands::captions::add(video_id, lang, file_path, label.as_deref())
                .await
                .context("Captions add command failed")
        }
        "delete" => {
            let video_id = positional(&rest, 1, "a video ID for captions delete")?;
            let lang = positional(&rest, 2, "a language code for captions delete")?;
            commands::captions::delete(video_id, lang)
                .await
                .context("Captions delete command failed")
        }
        other => bail!(
            "Unknown captions action: '{}'. Use 'add' or 'delete'.",
            other
        ),
    }
}
