pub mod execution_instructions;

pub use execution_instructions::{
    is_execution_instructions_file, render_execution_instructions, EXECUTION_INSTRUCTIONS_FILE,
};
