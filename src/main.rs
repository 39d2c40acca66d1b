use std::error::Error;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use visionary::{
    format_to_content_type, generate_url, parse_options_string, ImageFields, LogSink, UrlOptions,
    VisionaryCodec,
};

/// Encode and decode Visionary image codes and URLs.
#[derive(Parser, Debug)]
#[command(name = "visionary", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the code for an image
    Code {
        #[command(flatten)]
        fields: FieldArgs,

        /// Use the legacy five-field layout
        #[arg(long)]
        legacy: bool,
    },

    /// Print the URL for an image
    Url {
        #[command(flatten)]
        fields: FieldArgs,

        /// Custom endpoint; only its origin is used
        #[arg(long)]
        endpoint: Option<String>,

        /// Filename for the last path segment
        #[arg(long)]
        filename: Option<String>,

        /// Comma-separated display options (e.g. "sm,webp,debug")
        #[arg(long)]
        options: Option<String>,
    },

    /// Decode a URL or bare code and print it as JSON
    Parse {
        /// Visionary URL or code
        input: String,

        /// Decode the code with the legacy five-field layout
        #[arg(long)]
        legacy: bool,

        /// Output compact JSON instead of pretty-printing.
        #[arg(long)]
        compact: bool,
    },

    /// Print the content type and extension of a format token
    ContentType {
        /// Format token such as "webp" or "f_avif"
        format: String,
    },
}

#[derive(Args, Debug)]
struct FieldArgs {
    /// Visionary file id or image URL
    #[arg(long)]
    file_id: String,

    /// Source image width in pixels
    #[arg(long)]
    width: u32,

    /// Source image height in pixels
    #[arg(long)]
    height: u32,

    /// Background color code
    #[arg(long, default_value = "")]
    bcc: String,

    /// Blurhash string
    #[arg(long, default_value = "")]
    blurhash: String,

    /// Blurhash x component count
    #[arg(long, requires = "blurhash_y")]
    blurhash_x: Option<u32>,

    /// Blurhash y component count
    #[arg(long, requires = "blurhash_x")]
    blurhash_y: Option<u32>,

    /// Alt text
    #[arg(long)]
    alt_text: Option<String>,
}

impl FieldArgs {
    fn into_fields(self) -> ImageFields {
        ImageFields {
            file_id: self.file_id,
            source_width: self.width,
            source_height: self.height,
            bcc: self.bcc,
            blurhash: self.blurhash,
            blurhash_x: self.blurhash_x,
            blurhash_y: self.blurhash_y,
            alt_text: self.alt_text,
        }
    }
}

fn codec(legacy: bool) -> VisionaryCodec {
    if legacy {
        VisionaryCodec::legacy()
    } else {
        VisionaryCodec::default()
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn Error>> {
    match cli.command {
        Command::Code { fields, legacy } => {
            println!("{}", codec(legacy).encode(&fields.into_fields())?);
        }
        Command::Url {
            fields,
            endpoint,
            filename,
            options,
        } => {
            let url_options = UrlOptions {
                endpoint,
                filename,
                options: options.as_deref().map(parse_options_string).unwrap_or_default(),
            };
            println!("{}", generate_url(&fields.into_fields(), &url_options)?);
        }
        Command::Parse {
            input,
            legacy,
            compact,
        } => {
            let Some(image) = codec(legacy).parse_visionary_string(&input, LogSink) else {
                eprintln!("not a valid Visionary URL or code: {}", input);
                return Ok(ExitCode::FAILURE);
            };
            let json = if compact {
                serde_json::to_string(&image)?
            } else {
                serde_json::to_string_pretty(&image)?
            };
            println!("{}", json);
        }
        Command::ContentType { format } => {
            let content_type = format_to_content_type(&format)?;
            println!("{}\t{}", content_type.content_type, content_type.extension);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
