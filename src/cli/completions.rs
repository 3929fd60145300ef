use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    boardprops completions bash > ~/.bash_completion.d/boardprops\n\n\
                  Generate zsh completions:\n    boardprops completions zsh > ~/.zfunc/_boardprops\n\n\
                  Generate fish completions:\n    boardprops completions fish > ~/.config/fish/completions/boardprops.fish\n\n\
                  Generate PowerShell completions:\n    boardprops completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
