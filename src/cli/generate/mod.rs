//! Generate command - prints random users

use clap::Args;

use crate::domain::UserField;
use crate::infrastructure::user::UserGenerator;

/// Arguments for the generate command
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Number of users to generate
    #[arg(long, short = 'n', default_value_t = 1)]
    pub count: usize,

    /// Replace one field with an invalid value (username, password, email, roles)
    #[arg(long)]
    pub corrupt: Option<UserField>,
}

/// Print generated users as JSON lines
pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let generator = UserGenerator::new();

    for line in render(&generator, &args)? {
        println!("{}", line);
    }

    Ok(())
}

fn render(generator: &UserGenerator, args: &GenerateArgs) -> anyhow::Result<Vec<String>> {
    (0..args.count)
        .map(|_| {
            let user = generator.generate();
            let user = match args.corrupt {
                Some(field) => user.corrupt(field),
                None => user,
            };
            Ok::<_, anyhow::Error>(serde_json::to_string(&user)?)
        })
        .collect()
}
