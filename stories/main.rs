//! This module contains the main entrypoint to the stories cli.

use anyhow::{format_err, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use comp_button::BUTTON_CLASS;
use comp_button_stories::{find_story, Actions, Story, STORIES};
use html::Event;

#[derive(Parser)]
#[clap(about = "Render and click the button stories.")]
struct Options {
	#[clap(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	#[clap(name = "list", about = "list the stories")]
	List,
	#[clap(name = "render", about = "print the html of a story")]
	Render(RenderOptions),
	#[clap(
		name = "click",
		about = "click the button in a story and print the actions it recorded"
	)]
	Click(ClickOptions),
}

#[derive(Args, Debug)]
struct RenderOptions {
	/// The name of the story, such as "with text".
	story: String,
}

#[derive(Args, Debug)]
struct ClickOptions {
	/// The name of the story, such as "with text".
	story: String,
	/// How many times to click the button.
	#[clap(long, env = "STORY_CLICKS", default_value = "1")]
	times: usize,
}

fn main() {
	let env = env_logger::Env::default().default_filter_or("comp_button_stories=info");
	env_logger::Builder::from_env(env)
		.format_level(false)
		.format_module_path(false)
		.format_timestamp(None)
		.init();
	let options = Options::parse();
	let result = match options.command {
		Command::List => cli_list(),
		Command::Render(options) => cli_render(options),
		Command::Click(options) => cli_click(options),
	};
	if let Err(error) = result {
		eprintln!("{}: {}", "error".red().bold(), error);
		std::process::exit(1);
	}
}

fn cli_list() -> Result<()> {
	for story in STORIES {
		println!("{}", story.name);
	}
	Ok(())
}

fn cli_render(options: RenderOptions) -> Result<()> {
	let story = story(&options.story)?;
	let html = story.render(&Actions::new()).render_to_string();
	println!("{}", html);
	Ok(())
}

fn cli_click(options: ClickOptions) -> Result<()> {
	let story = story(&options.story)?;
	let actions = Actions::new();
	let node = story.render(&actions).into_rendered();
	let button = node
		.find(|host| host.has_class(BUTTON_CLASS))
		.ok_or_else(|| format_err!("story \"{}\" has no button to click", story.name))?;
	for _ in 0..options.times {
		button.dispatch(&Event::click());
	}
	for action in actions.recorded() {
		println!("{}: {:?}", action.name, action.event);
	}
	Ok(())
}

fn story(name: &str) -> Result<&'static Story> {
	find_story(name).ok_or_else(|| format_err!("no story named \"{}\"", name))
}
