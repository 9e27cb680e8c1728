use clap::Parser;
use melodl::downloader::HttpDownloader;
use melodl::pipeline::Pipeline;
use melodl::resolver::YtDlpResolver;
use melodl::tags::LoftyTagWriter;
use melodl::transcoder::FfmpegTranscoder;
use std::path::PathBuf;

#[derive(Parser, Clone)]
#[command(
    name = "melodl",
    about = "Downloads Youtube videos and playlists as tagged mp3 files."
)]
pub struct Cli {
    /// Video or playlist IDs or URLs, processed in the given order.
    pub inputs: Vec<String>,

    /// Directory receiving the final tagged mp3 files.
    #[arg(long = "output-dir", short, default_value = "Output")]
    pub output_dir: PathBuf,

    /// Directory holding the pre-transcode intermediates.
    #[arg(long = "temp-dir", short, default_value = "Temp")]
    pub temp_dir: PathBuf,

    /// Path to the yt-dlp executable used for resolving videos.
    #[arg(long = "ytdlp", default_value = "yt-dlp")]
    pub ytdlp: PathBuf,

    /// Path to the ffmpeg executable used for transcoding.
    #[arg(long = "ffmpeg", default_value = "ffmpeg")]
    pub ffmpeg: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();
    let args = Cli::parse();

    let pipeline = Pipeline::new(
        YtDlpResolver::new(args.ytdlp),
        HttpDownloader::new(),
        FfmpegTranscoder::new(args.ffmpeg),
        LoftyTagWriter,
        args.temp_dir,
        args.output_dir,
    );

    melodl::run(&args.inputs, &pipeline).await?;
    Ok(())
}
