//! Interactive band entry
//!
//! Asks for bands one at a time until the user declines to add more or
//! the input ends.

use crate::filters::band::Band;
use std::io::{self, BufRead, Write};

/// Prompt loop over any line source and sink
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the sink, mainly for inspecting what was printed
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one line, `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Ask for a "frequency gain" pair until one parses
    fn ask_pair(&mut self, label: &str) -> io::Result<Option<(u32, f64)>> {
        loop {
            write!(self.output, "{} freq & gain: ", label)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            let mut tokens = line.split_whitespace();
            let freq = tokens.next().and_then(|t| t.parse::<u32>().ok());
            let gain = tokens.next().and_then(|t| t.parse::<f64>().ok());

            match (freq, gain) {
                (Some(freq), Some(gain)) => return Ok(Some((freq, gain))),
                _ => writeln!(self.output, "Bad input")?,
            }
        }
    }

    /// Ask whether to continue; `false` on "no" or end of input
    fn ask_more(&mut self) -> io::Result<bool> {
        writeln!(self.output, "Want to enter more frequency bands? (y/n)")?;

        loop {
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };

            match line.trim().to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Enter 'yes' or 'no'")?,
            }
        }
    }

    /// Collect bands for a signal at `sample_rate`
    ///
    /// Out-of-range or misordered bands are reported and asked again, so
    /// every returned band passes validation.
    pub fn collect_bands(&mut self, sample_rate: u32) -> io::Result<Vec<Band>> {
        let nyquist = sample_rate / 2;
        writeln!(self.output, "Greetings!\n")?;
        writeln!(self.output, "Please enter frequencies between 0 and {}.", nyquist)?;
        writeln!(self.output, "Gain must be between 0 and 1")?;

        let mut bands = Vec::new();

        loop {
            writeln!(self.output)?;
            let Some((freq1, gain1)) = self.ask_pair("Low")? else {
                break;
            };
            let Some((freq2, gain2)) = self.ask_pair("High")? else {
                break;
            };

            let in_range = freq1 <= nyquist
                && freq2 <= nyquist
                && (0.0..=1.0).contains(&gain1)
                && (0.0..=1.0).contains(&gain2);
            if !in_range {
                writeln!(self.output, "\nInput out of range")?;
                continue;
            }

            if freq2 <= freq1 {
                writeln!(self.output, "\nPlease enter frequencies so that low freq < high freq")?;
                continue;
            }

            bands.push(Band::new(freq1, freq2, gain1, gain2));

            if !self.ask_more()? {
                break;
            }
        }

        Ok(bands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str, sample_rate: u32) -> (Vec<Band>, String) {
        let mut prompt = Prompt::new(Cursor::new(script.to_string()), Vec::new());
        let bands = prompt.collect_bands(sample_rate).unwrap();
        let printed = String::from_utf8(prompt.into_output()).unwrap();
        (bands, printed)
    }

    #[test]
    fn test_single_band() {
        let (bands, printed) = run("1000 0\n2000 0.5\nn\n", 44100);
        assert_eq!(bands, vec![Band::new(1000, 2000, 0.0, 0.5)]);
        assert!(printed.contains("between 0 and 22050"));
    }

    #[test]
    fn test_multiple_bands() {
        let (bands, _) = run("100 0\n200 0\nYES\n300 1\n400 0.5\nno\n", 44100);
        assert_eq!(bands.len(), 2);
        assert_eq!(bands[1], Band::new(300, 400, 1.0, 0.5));
    }

    #[test]
    fn test_bad_input_reasked() {
        let (bands, printed) = run("abc\n1000 0\nhigh\n2000 0\nn\n", 44100);
        assert_eq!(bands.len(), 1);
        assert_eq!(printed.matches("Bad input").count(), 2);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let (bands, printed) = run("1000 0\n30000 0\n1000 0\n2000 2\n1000 0\n2000 0\nn\n", 44100);
        assert_eq!(bands, vec![Band::new(1000, 2000, 0.0, 0.0)]);
        assert_eq!(printed.matches("Input out of range").count(), 2);
    }

    #[test]
    fn test_misordered_rejected() {
        let (bands, printed) = run("2000 0\n1000 0\nn\n", 44100);
        assert!(bands.is_empty());
        assert!(printed.contains("low freq < high freq"));
    }

    #[test]
    fn test_yes_no_reasked() {
        let (bands, printed) = run("1000 0\n2000 0\nmaybe\nn\n", 44100);
        assert_eq!(bands.len(), 1);
        assert!(printed.contains("Enter 'yes' or 'no'"));
    }

    #[test]
    fn test_end_of_input_stops() {
        let (bands, _) = run("1000 0\n", 44100);
        assert!(bands.is_empty());

        let (bands, _) = run("1000 0\n2000 0\n", 44100);
        assert_eq!(bands.len(), 1);
    }
}
