pub const P_NAMESPACE: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
pub const A_NAMESPACE: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
pub const RELS_NAMESPACE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

pub const P_NAMESPACE_STRICT: &str = "http://purl.oclc.org/ooxml/presentationml/main";
pub const A_NAMESPACE_STRICT: &str = "http://purl.oclc.org/ooxml/drawingml/main";
pub const RELS_NAMESPACE_STRICT: &str = "http://purl.oclc.org/ooxml/officeDocument/relationships";

pub const OFFICE_DOCUMENT_REL_TYPE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
pub const OFFICE_DOCUMENT_REL_TYPE_STRICT: &str = "http://purl.oclc.org/ooxml/officeDocument/relationships/officeDocument";
pub const SLIDE_REL_TYPE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
pub const SLIDE_REL_TYPE_STRICT: &str = "http://purl.oclc.org/ooxml/officeDocument/relationships/slide";

pub const ROOT_RELS_PATH: &str = "_rels/.rels";
pub const DEFAULT_PRESENTATION_PATH: &str = "ppt/presentation.xml";
