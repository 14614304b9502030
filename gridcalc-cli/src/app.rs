use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::Result;
use gridcalc_core::{Grid, GridError};

use crate::input::{Token, TokenReader};
use crate::Config;

/// Element type of the grids the menu creates
pub type Cell = i32;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    Create,
    Show,
    MergeHorizontal,
    MergeVertical,
    Add,
    MultiplyScalar,
    Crop,
    Subtract,
    Divide,
    SubtractScalar,
    DivideScalar,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 12] = [
        MenuChoice::Create,
        MenuChoice::Show,
        MenuChoice::MergeHorizontal,
        MenuChoice::MergeVertical,
        MenuChoice::Add,
        MenuChoice::MultiplyScalar,
        MenuChoice::Crop,
        MenuChoice::Subtract,
        MenuChoice::Divide,
        MenuChoice::SubtractScalar,
        MenuChoice::DivideScalar,
        MenuChoice::Exit,
    ];

    pub fn number(self) -> u32 {
        match self {
            MenuChoice::Exit => 0,
            MenuChoice::Create => 1,
            MenuChoice::Show => 2,
            MenuChoice::MergeHorizontal => 3,
            MenuChoice::MergeVertical => 4,
            MenuChoice::Add => 5,
            MenuChoice::MultiplyScalar => 6,
            MenuChoice::Crop => 7,
            MenuChoice::Subtract => 8,
            MenuChoice::Divide => 9,
            MenuChoice::SubtractScalar => 10,
            MenuChoice::DivideScalar => 11,
        }
    }

    pub fn from_number(number: u32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|choice| choice.number() == number)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Exit => "Exit",
            MenuChoice::Create => "Create image",
            MenuChoice::Show => "Display image",
            MenuChoice::MergeHorizontal => "Horizontally merge images",
            MenuChoice::MergeVertical => "Vertically merge images",
            MenuChoice::Add => "Add images",
            MenuChoice::MultiplyScalar => "Multiply the image by a scalar",
            MenuChoice::Crop => "Crop the image",
            MenuChoice::Subtract => "Subtract one image from another",
            MenuChoice::Divide => "Divide one image by another",
            MenuChoice::SubtractScalar => "Subtract a scalar from the image",
            MenuChoice::DivideScalar => "Divide the image by a scalar",
        }
    }
}

/// The console menu. Holds up to two grids and applies one grid operation per choice.
pub struct GridCalcApp<R, W> {
    input: TokenReader<R>,
    output: W,
    config: Config,
    first: Option<Grid<Cell>>,
    second: Option<Grid<Cell>>,
}

impl<R: BufRead, W: Write> GridCalcApp<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input: TokenReader::new(input),
            output,
            config,
            first: None,
            second: None,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the user exits or the input ends.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!(cell_width = self.config.cell_width, "menu started");
        while self.step()? {}
        tracing::info!("menu finished");
        Ok(())
    }

    /// Handles one menu choice. Returns `false` once the loop should stop.
    fn step(&mut self) -> Result<bool> {
        self.print_menu()?;
        let choice = match self.input.parse::<u32>()? {
            Token::Value(number) => number,
            Token::Invalid(token) => {
                tracing::debug!(%token, "unparseable menu choice");
                self.input.discard_line();
                writeln!(self.output, "Invalid input. Try again.")?;
                return Ok(true);
            }
            Token::EndOfInput => return Ok(false),
        };

        let Some(choice) = MenuChoice::from_number(choice) else {
            writeln!(self.output, "Unknown option.")?;
            return Ok(true);
        };

        tracing::debug!(?choice, "menu choice");
        match choice {
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting.")?;
                self.first = None;
                self.second = None;
                return Ok(false);
            }
            MenuChoice::Create => self.create()?,
            MenuChoice::Show => self.show()?,
            MenuChoice::MergeHorizontal => {
                self.with_both("Horizontal merge result:", |a, b| a.concat_horizontal(b))?;
            }
            MenuChoice::MergeVertical => {
                self.with_both("Vertical merge result:", |a, b| a.concat_vertical(b))?;
            }
            MenuChoice::Add => self.with_both("Addition result:", |a, b| a.try_add(b))?,
            MenuChoice::Subtract => self.with_both("Subtraction result:", |a, b| a.try_sub(b))?,
            MenuChoice::Divide => self.with_both("Division result:", |a, b| a.try_div(b))?,
            MenuChoice::MultiplyScalar => self.multiply_scalar()?,
            MenuChoice::Crop => self.crop()?,
            MenuChoice::SubtractScalar => self.subtract_scalar()?,
            MenuChoice::DivideScalar => self.divide_scalar()?,
        }
        Ok(true)
    }

    fn print_menu(&mut self) -> Result<()> {
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }
        write!(self.output, "Enter: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads one value, reporting bad input. `None` aborts the current action.
    fn read_value<T: std::str::FromStr>(&mut self) -> Result<Option<T>> {
        match self.input.parse::<T>()? {
            Token::Value(value) => Ok(Some(value)),
            Token::Invalid(token) => {
                tracing::debug!(%token, "unparseable value");
                self.input.discard_line();
                writeln!(self.output, "Invalid input. Try again.")?;
                Ok(None)
            }
            Token::EndOfInput => Ok(None),
        }
    }

    fn create(&mut self) -> Result<()> {
        let ordinal = match (&self.first, &self.second) {
            (None, _) => "first",
            (Some(_), None) => "second",
            (Some(_), Some(_)) => {
                writeln!(self.output, "Both images already created.")?;
                return Ok(());
            }
        };
        writeln!(self.output, "Creating the {ordinal} image:")?;

        let Some(grid) = self.read_grid()? else {
            return Ok(());
        };
        tracing::info!(ordinal, shape = ?grid.shape(), "image created");
        if self.first.is_none() {
            self.first = Some(grid);
        } else {
            self.second = Some(grid);
        }
        Ok(())
    }

    fn read_grid(&mut self) -> Result<Option<Grid<Cell>>> {
        self.prompt("Width: ")?;
        let Some(width) = self.read_value::<usize>()? else {
            return Ok(None);
        };
        self.prompt("Height: ")?;
        let Some(height) = self.read_value::<usize>()? else {
            return Ok(None);
        };

        let Some(count) = width.checked_mul(height) else {
            writeln!(self.output, "Invalid input. Try again.")?;
            return Ok(None);
        };
        writeln!(self.output, "Enter {count} values:")?;
        let mut values = Vec::with_capacity(count.min(4096));
        for _ in 0..count {
            let Some(value) = self.read_value::<Cell>()? else {
                return Ok(None);
            };
            values.push(value);
        }
        Ok(Some(Grid::from_row_major(height, width, values)?))
    }

    fn show(&mut self) -> Result<()> {
        for (index, slot) in [(1, &self.first), (2, &self.second)] {
            match slot {
                Some(grid) => {
                    writeln!(self.output, "Image {index}:")?;
                    write!(self.output, "{}", grid.display(self.config.cell_width))?;
                }
                None => writeln!(self.output, "Image {index} not created.")?,
            }
        }
        Ok(())
    }

    fn with_both<T: Display>(
        &mut self,
        heading: &str,
        op: impl FnOnce(&Grid<Cell>, &Grid<Cell>) -> Result<Grid<T>, GridError>,
    ) -> Result<()> {
        let (Some(a), Some(b)) = (&self.first, &self.second) else {
            writeln!(self.output, "Create both images first.")?;
            return Ok(());
        };
        let result = op(a, b);
        self.report(heading, result)
    }

    fn require_first(&mut self) -> Result<Option<Grid<Cell>>> {
        if self.first.is_none() {
            writeln!(self.output, "Image not created.")?;
        }
        Ok(self.first.clone())
    }

    fn multiply_scalar(&mut self) -> Result<()> {
        let Some(grid) = self.require_first()? else {
            return Ok(());
        };
        self.prompt("Enter scalar: ")?;
        let Some(scalar) = self.read_value::<f64>()? else {
            return Ok(());
        };
        self.report("Result:", Ok(grid.mul_scalar(scalar)))
    }

    fn crop(&mut self) -> Result<()> {
        let Some(grid) = self.require_first()? else {
            return Ok(());
        };
        self.prompt("Enter r1 r2 c1 c2: ")?;
        let mut coords = [0_isize; 4];
        for coord in &mut coords {
            let Some(value) = self.read_value::<isize>()? else {
                return Ok(());
            };
            *coord = value;
        }
        let [r1, r2, c1, c2] = coords;
        self.report("Cropped:", grid.crop(r1, r2, c1, c2))
    }

    fn subtract_scalar(&mut self) -> Result<()> {
        let Some(grid) = self.require_first()? else {
            return Ok(());
        };
        self.prompt("Scalar to subtract: ")?;
        let Some(scalar) = self.read_value::<Cell>()? else {
            return Ok(());
        };
        self.report("Result:", Ok(grid.sub_scalar(scalar)))
    }

    fn divide_scalar(&mut self) -> Result<()> {
        let Some(grid) = self.require_first()? else {
            return Ok(());
        };
        self.prompt("Scalar to divide: ")?;
        let Some(scalar) = self.read_value::<f64>()? else {
            return Ok(());
        };
        if scalar == 0.0 {
            writeln!(self.output, "Cannot divide by zero.")?;
            return Ok(());
        }
        self.report("Result:", grid.div_scalar(scalar))
    }

    fn report<T: Display>(
        &mut self,
        heading: &str,
        result: Result<Grid<T>, GridError>,
    ) -> Result<()> {
        match result {
            Ok(grid) => {
                writeln!(self.output, "{heading}")?;
                write!(self.output, "{}", grid.display(self.config.cell_width))?;
            }
            Err(err) => {
                tracing::warn!(%err, "operation failed");
                writeln!(self.output, "Error: {err}")?;
            }
        }
        Ok(())
    }
}
