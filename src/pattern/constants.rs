// Characters available on the game keyboard
pub const NONZERO_DIGITS: [char; 9] = ['1', '2', '3', '4', '5', '6', '7', '8', '9'];
pub const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
pub const OPERATORS: [char; 4] = ['+', '-', '*', '/'];
pub const EQUALS: char = '=';
