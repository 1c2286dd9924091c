use super::AlignmentRecord;

use anyhow::Context;
use std::io::Write;

#[derive(Debug, Clone, Copy)]
pub enum Field {
    Pair,
    FirstLength,
    SecondLength,
    AliLength,
    Score,
    Matches,
    Mismatches,
    Gaps,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Pair,
        Field::FirstLength,
        Field::SecondLength,
        Field::AliLength,
        Field::Score,
        Field::Matches,
        Field::Mismatches,
        Field::Gaps,
    ];

    pub fn extract_from(&self, record: &AlignmentRecord) -> String {
        match self {
            Field::Pair => record.index.to_string(),
            Field::FirstLength => record.seq_1.len().to_string(),
            Field::SecondLength => record.seq_2.len().to_string(),
            Field::AliLength => record.top.len().to_string(),
            Field::Score => record.score.to_string(),
            Field::Matches => record.stats.matches.to_string(),
            Field::Mismatches => record.stats.mismatches.to_string(),
            Field::Gaps => record.stats.gaps.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct TableFormat {
    pub fields: Vec<Field>,
    pub labels: Vec<Vec<String>>,
    pub min_widths: Vec<usize>,
    pub widths: Vec<usize>,
}

impl TableFormat {
    pub fn new(fields: &[Field]) -> anyhow::Result<Self> {
        let mut labels = vec![];
        let mut min_widths = vec![];
        let mut widths = vec![];

        // this regex matches CamelCaseWords
        let label_regex =
            regex::Regex::new(r"[A-Z][a-z]*").context("failed to build field label regex")?;

        // this closure extracts the words & minimum column width for a field
        let label_fn = |field: &Field| -> anyhow::Result<(Vec<_>, usize), anyhow::Error> {
            // the Debug string for an enum produces the variant name
            let field_name = format!("{:?}", field);

            let (label_words, lengths): (Vec<_>, Vec<_>) = label_regex
                .find_iter(&field_name)
                .map(|m| (m.as_str().to_string().to_lowercase(), m.len()))
                .unzip();

            // the longest word is the min width of the column
            let min_width = *lengths
                .iter()
                .max()
                .context("failed to produce max field label width")?;
            Ok((label_words, min_width))
        };

        let (first, rest) = fields
            .split_first()
            .context("a table needs at least one field")?;

        // the first column needs +2 to its minimum
        // width to accomodate the "# " prefix
        let (mut label_words, mut min_width) = label_fn(first)?;
        labels.push(label_words);
        widths.push(min_width + 2);
        min_widths.push(min_width + 2);

        for field in rest {
            (label_words, min_width) = label_fn(field)?;
            labels.push(label_words);
            widths.push(min_width);
            min_widths.push(min_width);
        }

        Ok(Self {
            fields: fields.to_vec(),
            labels,
            min_widths,
            widths,
        })
    }

    pub fn update_widths(&mut self, record: &AlignmentRecord) {
        self.fields.iter().enumerate().for_each(|(idx, field)| {
            let width = field.extract_from(record).len();
            self.widths[idx] = self.widths[idx].max(width);
        });
    }

    pub fn reset_widths(&mut self) {
        self.widths
            .iter_mut()
            .zip(self.min_widths.iter())
            .for_each(|(width, min_width)| *width = *min_width);
    }

    pub fn header(&self) -> anyhow::Result<String> {
        // the number of rows in the header is
        // the max number of words in a field
        let num_rows = self
            .labels
            .iter()
            .map(|l| l.len())
            .max()
            .context("field headers are empty")?;

        let mut header_row_strings: Vec<String> = vec!["# ".to_string(); num_rows + 1];

        // this function appends the field labels to the header
        let header_append_fn =
            |words: &Vec<String>, width: usize, header_row_strings: &mut Vec<String>| {
                let offset = num_rows - words.len();
                let mut words_padded = vec![""; offset];
                words.iter().for_each(|w| words_padded.push(w));

                words_padded.iter().enumerate().for_each(|(row, token)| {
                    let row_string = &mut header_row_strings[row];
                    *row_string = format!("{row_string}{:width$} ", token, width = width);
                });
                let last_row_idx = header_row_strings.len() - 1;
                let last_row_string = &mut header_row_strings[last_row_idx];
                *last_row_string = format!("{last_row_string}{} ", "-".repeat(width));
            };

        // the first column gets -2 to it's width to account for the "# "
        header_append_fn(&self.labels[0], self.widths[0] - 2, &mut header_row_strings);

        self.labels
            .iter()
            // skip the first column
            .skip(1)
            .zip(self.widths.iter().skip(1))
            .for_each(|(words, &width)| {
                header_append_fn(words, width, &mut header_row_strings);
            });

        Ok(header_row_strings
            .iter()
            .map(|row| row.trim_end())
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

impl AlignmentRecord {
    pub fn tab_string_formatted(&self, format: &TableFormat) -> String {
        let mut tab_string = String::new();

        format
            .fields
            .iter()
            .zip(format.widths.iter())
            .for_each(|(field, width)| {
                let val = field.extract_from(self);
                tab_string = format!("{tab_string}{val:>width$} ", width = width)
            });

        // remove the last space
        tab_string.pop();

        tab_string
    }
}

pub fn write_tabular_output(records: &[AlignmentRecord], out: &mut impl Write) -> anyhow::Result<()> {
    let mut format = TableFormat::new(&Field::ALL)?;
    records.iter().for_each(|r| format.update_widths(r));

    writeln!(out, "{}", format.header()?)?;
    for record in records {
        writeln!(out, "{}", record.tab_string_formatted(&format))?;
    }
    Ok(())
}
