pub mod session_command;
