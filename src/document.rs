use crate::{
    info::Info,
    pagesize::PageSize,
    refs::{ObjectReferences, RefType},
    surface::{Point, Surface},
    units::{Mm, Pt},
    CarpetResult,
};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Str};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Resource name the label font is registered under on the page
const LABEL_FONT: Name<'static> = Name(b"F0");

/// A single-page PDF that can be drawn on through the [`Surface`] trait, then
/// rendered out with a call to [`PdfSurface::write`] or [`PdfSurface::save`].
///
/// Drawing happens in millimetres from the top-left corner of the page; the
/// coordinates are converted to PDF points (origin at the bottom-left) as the
/// content stream is built. Text is set in Helvetica, one of the standard 14
/// fonts every PDF reader provides, so nothing has to be embedded.
pub struct PdfSurface {
    pub info: Option<Info>,
    page_size: PageSize,
    font_size: f32,
    content: Content,
}

impl PdfSurface {
    /// Start a blank page of the given size, with black strokes and text
    pub fn new(page_size: PageSize, font_size: f32) -> PdfSurface {
        let mut content = Content::new();
        content.set_stroke_gray(0.0);
        content.set_fill_gray(0.0);

        PdfSurface {
            info: None,
            page_size,
            font_size,
            content,
        }
    }

    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Converts a top-left based millimetre point into bottom-left based PDF points
    fn to_pdf(&self, (x, y): Point) -> (f32, f32) {
        let x: Pt = x.into();
        let y: Pt = (self.page_size.1 - y).into();
        (*x, *y)
    }

    /// Write the entire document to the writer. The document is rendered in memory first
    /// and then written out in one go, so nothing reaches `w` if rendering fails.
    pub fn write<W: Write>(self, mut w: W) -> CarpetResult<()> {
        let PdfSurface {
            info,
            page_size,
            font_size: _,
            content,
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);
        let page_id = refs.gen(RefType::Page);
        let font_id = refs.gen(RefType::LabelFont);
        let content_id = refs.gen(RefType::ContentForPage);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        writer.catalog(catalog_id).pages(page_tree_id);
        writer.pages(page_tree_id).count(1).kids([page_id]);

        let width: Pt = page_size.0.into();
        let height: Pt = page_size.1.into();

        let mut page = writer.page(page_id);
        page.media_box(Rect::new(0.0, 0.0, *width, *height));
        page.parent(page_tree_id);
        page.contents(content_id);
        page.resources().fonts().pair(LABEL_FONT, font_id);
        page.finish();

        writer
            .type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        let rendered = content.finish();
        let compressed = compress_to_vec_zlib(
            &rendered,
            CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(content_id, &compressed)
            .filter(Filter::FlateDecode);

        w.write_all(writer.finish().as_slice())?;
        w.flush().map_err(Into::into)
    }

    /// Render the document and save it to `path`, creating or truncating the file
    pub fn save<P: AsRef<Path>>(self, path: P) -> CarpetResult<()> {
        let file = File::create(path)?;
        self.write(BufWriter::new(file))
    }
}

impl Surface for PdfSurface {
    fn set_line_width(&mut self, width: Mm) {
        let width: Pt = width.into();
        self.content.set_line_width(*width);
    }

    fn line(&mut self, from: Point, to: Point) {
        let (x1, y1) = self.to_pdf(from);
        let (x2, y2) = self.to_pdf(to);
        self.content.move_to(x1, y1);
        self.content.line_to(x2, y2);
        self.content.stroke();
    }

    fn text(&mut self, at: Point, text: &str) {
        let (x, y) = self.to_pdf(at);
        self.content.begin_text();
        self.content.set_font(LABEL_FONT, self.font_size);
        self.content.next_line(x, y);
        self.content.show(Str(text.as_bytes()));
        self.content.end_text();
    }
}
