// Generator module: the external free-text collaborator consulted when no
// structured catalog interpretation applies.

pub mod openai;
pub mod traits;

pub use openai::OpenAiGenerator;
pub use traits::Generator;
