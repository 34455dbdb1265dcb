use eurocore_core::{
    errors::Error,
    models::telegrams::{DeleteTelegram, NewTelegram, TelegramType},
    Result,
};

pub const USAGE: &str = "usage: eurocore <command> [args]

commands:
  telegrams                                               list queued telegrams
  send-telegram <sender> <recipient> <id> <secret> <type>  queue a telegram (type: standard|recruitment)
  delete-telegram <recipient> <id>                        remove a queued telegram
  delete-dispatch <id>                                    queue deletion of a dispatch
  template <id>                                           show a template";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Telegrams,
    SendTelegram(NewTelegram),
    DeleteTelegram(DeleteTelegram),
    DeleteDispatch(i64),
    Template(String),
}

impl Command {
    /// Parse the arguments following the program name.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let args: Vec<&str> = args.iter().map(|s| s.as_ref()).collect();
        let Some((name, rest)) = args.split_first() else {
            return Err(usage_error("missing command"));
        };

        match (*name, rest) {
            ("telegrams", []) => Ok(Command::Telegrams),
            ("send-telegram", [sender, recipient, id, secret, tg_type]) => {
                let tg_type: TelegramType = tg_type.parse()?;
                Ok(Command::SendTelegram(NewTelegram::new(
                    *sender, *recipient, *id, *secret, tg_type,
                )))
            }
            ("delete-telegram", [recipient, id]) => {
                Ok(Command::DeleteTelegram(DeleteTelegram::new(*recipient, *id)))
            }
            ("delete-dispatch", [id]) => {
                let id = id
                    .parse::<i64>()
                    .map_err(|_| usage_error(&format!("invalid dispatch id {id:?}")))?;
                Ok(Command::DeleteDispatch(id))
            }
            ("template", [id]) => Ok(Command::Template(id.to_string())),
            (
                "telegrams" | "send-telegram" | "delete-telegram" | "delete-dispatch" | "template",
                _,
            ) => Err(usage_error(&format!("wrong number of arguments for {name}"))),
            (other, _) => Err(usage_error(&format!("unknown command {other:?}"))),
        }
    }
}

fn usage_error(reason: &str) -> Error {
    Error::Validation(format!("{reason}\n\n{USAGE}"))
}
