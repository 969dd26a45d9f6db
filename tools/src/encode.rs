use clap::Args;
use nn::encode_position;
use std::error::Error;

#[derive(Args)]
pub struct EncodeCommand {
    /// Position to encode
    #[arg(long, value_name = "fen")]
    fen: String,
}

pub fn encode(cmd: EncodeCommand) -> Result<(), Box<dyn Error>> {
    let tensor = encode_position(&cmd.fen)?;

    print!("{}", tensor);

    Ok(())
}
